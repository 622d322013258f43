//! Lambda adapter: turns a runtime event into one pipeline run and maps any
//! pipeline error into a failed invocation.

use lambda_runtime::LambdaEvent;
use tracing::{debug, info_span, Instrument};

use crate::app::mirror_use_case::MirrorUseCase;
use crate::app::ports::{ClockPort, HttpClientPort, ObjectStorePort};
use crate::domain::{Invocation, InvocationEvent};

/// Handle one invocation. Returns `()` on success; any error is handed back
/// to the runtime, which reports the invocation as failed.
pub async fn handle<H, S, C>(
    mirror: &MirrorUseCase<H, S, C>,
    event: LambdaEvent<InvocationEvent>,
) -> Result<(), lambda_runtime::Error>
where
    H: HttpClientPort + ?Sized,
    S: ObjectStorePort + ?Sized,
    C: ClockPort + ?Sized,
{
    let (payload, context) = event.into_parts();
    let invocation = Invocation::from_context(&context);
    let span = info_span!("invocation", request_id = %invocation.request_id);

    async {
        // The event is part of the contract but carries nothing we use
        debug!(name = %payload.name, age = payload.age, "event received");
        mirror.run(&invocation).await?;
        Ok::<(), lambda_runtime::Error>(())
    }
    .instrument(span)
    .await
}
