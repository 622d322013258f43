use std::sync::Arc;

use lambda_runtime::{service_fn, LambdaEvent};
use tracing::info;

use cep_mirror::app::mirror_use_case::MirrorUseCase;
use cep_mirror::config::{LogSettings, MirrorConfig};
use cep_mirror::domain::InvocationEvent;
use cep_mirror::handler;
use cep_mirror::infra::{ReqwestHttp, S3ObjectStore, SystemClock, TracedHttp, TracedStore};
use cep_mirror::logging;

type LiveMirror = MirrorUseCase<TracedHttp<ReqwestHttp>, TracedStore<S3ObjectStore>, SystemClock>;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    dotenv::dotenv().ok();

    // Keep the file writer guard alive for the life of the process
    let _log_guard = logging::init_logging(&LogSettings::from_env());

    let config = MirrorConfig::default();
    info!(source = %config.source_url, bucket = %config.bucket, region = %config.region, "starting cep_mirror");

    let store = S3ObjectStore::connect(&config).await?;
    let mirror: Arc<LiveMirror> = Arc::new(MirrorUseCase::new(
        config,
        Arc::new(TracedHttp::new(ReqwestHttp::new())),
        Arc::new(TracedStore::new(store)),
        Arc::new(SystemClock),
    ));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<InvocationEvent>| {
        let mirror = mirror.clone();
        async move { handler::handle(mirror.as_ref(), event).await }
    }))
    .await
}
