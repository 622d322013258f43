use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

use crate::error::Result;

// Fetch-side ports

/// A GET request ready to be sent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundRequest {
    pub url: Url,
    /// Remaining invocation time; `None` when the invocation is unbounded
    pub timeout: Option<Duration>,
}

/// Response headers have arrived; the body is still on the wire.
///
/// The body is owned: dropping the response releases the connection.
pub struct HttpResponse {
    pub status: u16,
    pub body: Box<dyn ResponseBody>,
}

impl std::fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResponse").field("status", &self.status).finish_non_exhaustive()
    }
}

#[async_trait]
pub trait ResponseBody: Send {
    /// Next chunk of the body, or `None` once the stream is complete
    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>>;
}

#[async_trait]
pub trait HttpClientPort: Send + Sync {
    async fn execute(&self, request: OutboundRequest) -> Result<HttpResponse>;
}

// Store-side ports

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PutObject {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait ObjectStorePort: Send + Sync {
    async fn put_object(&self, object: PutObject) -> Result<()>;
}

pub trait ClockPort: Send + Sync {
    fn now_millis(&self) -> i64;
}
