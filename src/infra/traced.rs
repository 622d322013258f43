//! Tracing decorators for outbound clients.
//!
//! Each wrapper opens one span per call around any port implementation, so
//! business code never has to know whether a client is instrumented.

use async_trait::async_trait;
use std::time::Instant;
use tracing::{field, instrument, warn, Span};

use crate::app::ports::{HttpClientPort, HttpResponse, ObjectStorePort, OutboundRequest, PutObject};
use crate::error::Result;

pub struct TracedHttp<H> {
    inner: H,
}

impl<H: HttpClientPort> TracedHttp<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<H: HttpClientPort> HttpClientPort for TracedHttp<H> {
    #[instrument(
        name = "http.request",
        skip(self, request),
        fields(http.method = "GET", http.url = %request.url, http.status_code = field::Empty, elapsed_ms = field::Empty)
    )]
    async fn execute(&self, request: OutboundRequest) -> Result<HttpResponse> {
        let t0 = Instant::now();
        let result = self.inner.execute(request).await;
        let span = Span::current();
        span.record("elapsed_ms", t0.elapsed().as_millis() as u64);
        match &result {
            Ok(response) => {
                span.record("http.status_code", response.status);
            }
            Err(e) => warn!(error = %e, "outbound request failed"),
        }
        result
    }
}

pub struct TracedStore<S> {
    inner: S,
}

impl<S: ObjectStorePort> TracedStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: ObjectStorePort> ObjectStorePort for TracedStore<S> {
    #[instrument(
        name = "s3.put_object",
        skip(self, object),
        fields(bucket = %object.bucket, key = %object.key, bytes = object.body.len(), elapsed_ms = field::Empty)
    )]
    async fn put_object(&self, object: PutObject) -> Result<()> {
        let t0 = Instant::now();
        let result = self.inner.put_object(object).await;
        Span::current().record("elapsed_ms", t0.elapsed().as_millis() as u64);
        if let Err(e) = &result {
            warn!(error = %e, "object write failed");
        }
        result
    }
}
