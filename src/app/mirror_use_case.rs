use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Url;
use tracing::{debug, error, info, info_span};

use crate::app::ports::{ClockPort, HttpClientPort, HttpResponse, ObjectStorePort, OutboundRequest, PutObject};
use crate::config::MirrorConfig;
use crate::constants::{self, PUT_OBJECT_SPAN};
use crate::domain::{FetchedPayload, Invocation, MirrorOutcome, PipelineStage, StoredObject};
use crate::error::{MirrorError, Result};
use crate::metrics::MirrorMetrics;

/// Fetches the configured source once and writes the body verbatim to the store.
///
/// Steps run strictly in order (build, execute, read, upload) and the first
/// error ends the run; nothing is retried and nothing is uploaded after a
/// failure.
pub struct MirrorUseCase<H: HttpClientPort + ?Sized, S: ObjectStorePort + ?Sized, C: ClockPort + ?Sized> {
    config: MirrorConfig,
    http: Arc<H>,
    store: Arc<S>,
    clock: Arc<C>,
}

impl<H, S, C> MirrorUseCase<H, S, C>
where
    H: HttpClientPort + ?Sized,
    S: ObjectStorePort + ?Sized,
    C: ClockPort + ?Sized,
{
    pub fn new(config: MirrorConfig, http: Arc<H>, store: Arc<S>, clock: Arc<C>) -> Self {
        Self { config, http, store, clock }
    }

    /// Build the GET request, bound to the invocation's remaining time
    pub fn build_request(&self, invocation: &Invocation) -> Result<OutboundRequest> {
        let url = Url::parse(&self.config.source_url)
            .map_err(|e| MirrorError::Construction(format!("invalid source url '{}': {}", self.config.source_url, e)))?;

        let timeout = invocation.remaining();
        if timeout == Some(Duration::ZERO) {
            return Err(MirrorError::Construction("invocation deadline already passed".to_string()));
        }

        Ok(OutboundRequest { url, timeout })
    }

    pub async fn execute(&self, request: OutboundRequest) -> Result<HttpResponse> {
        self.http.execute(request).await
    }

    /// Drain the body into memory. The response is consumed here, so its
    /// connection is released on every exit path.
    pub async fn read_body(response: HttpResponse) -> Result<FetchedPayload> {
        let HttpResponse { status, mut body } = response;
        let mut bytes = Vec::new();
        while let Some(chunk) = body.next_chunk().await? {
            bytes.extend_from_slice(&chunk);
        }
        // Status is reported, never checked: error pages are mirrored too
        debug!(status, bytes = bytes.len(), "response body read");
        Ok(FetchedPayload { status, bytes })
    }

    /// Key the payload by the current instant and assemble the write
    pub fn prepare_object(&self, payload: Vec<u8>) -> PutObject {
        let span = info_span!(PUT_OBJECT_SPAN, bucket = %self.config.bucket, key = tracing::field::Empty);
        span.in_scope(|| {
            let key = constants::object_key(self.clock.now_millis());
            span.record("key", key.as_str());
            PutObject {
                bucket: self.config.bucket.clone(),
                key,
                body: payload,
            }
        })
    }

    pub async fn upload(&self, payload: Vec<u8>) -> Result<StoredObject> {
        let object = self.prepare_object(payload);
        let stored = StoredObject {
            bucket: object.bucket.clone(),
            key: object.key.clone(),
            size: object.body.len(),
        };

        let t0 = Instant::now();
        self.store.put_object(object).await?;
        MirrorMetrics::record_upload(t0.elapsed().as_secs_f64());

        Ok(stored)
    }

    /// Run the whole pipeline for one invocation
    pub async fn run(&self, invocation: &Invocation) -> Result<MirrorOutcome> {
        let result = self.run_steps(invocation).await;
        match &result {
            Ok(outcome) => {
                debug!(key = %outcome.object.key, size = outcome.object.size, "object stored");
                info!("mirror succeeded");
            }
            Err(e) => {
                MirrorMetrics::record_failure(e.kind(), e.stage());
                let stage = e.stage().map(PipelineStage::as_str).unwrap_or("none");
                debug!(kind = e.kind(), stage, "pipeline aborted: {}", e);
                error!("mirror failed");
            }
        }
        result
    }

    async fn run_steps(&self, invocation: &Invocation) -> Result<MirrorOutcome> {
        let request = self.build_request(invocation)?;
        let remaining = request.timeout;

        let steps = async {
            let response = self.execute(request).await?;
            let payload = Self::read_body(response).await?;
            MirrorMetrics::record_fetch(payload.status, payload.bytes.len());
            let object = self.upload(payload.bytes).await?;
            Ok::<_, MirrorError>(MirrorOutcome { object, source_status: payload.status })
        };

        match remaining {
            Some(limit) => tokio::time::timeout(limit, steps)
                .await
                .map_err(|_| MirrorError::DeadlineExceeded)?,
            None => steps.await,
        }
    }
}
