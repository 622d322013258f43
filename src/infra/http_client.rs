use crate::app::ports::{HttpClientPort, HttpResponse, OutboundRequest, ResponseBody};
use crate::error::{MirrorError, Result};
use async_trait::async_trait;

/// reqwest-backed client. Built without decompression features, so the body
/// comes back exactly as the server sent it.
#[derive(Clone, Default)]
pub struct ReqwestHttp {
    client: reqwest::Client,
}

impl ReqwestHttp {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpClientPort for ReqwestHttp {
    async fn execute(&self, request: OutboundRequest) -> Result<HttpResponse> {
        let mut builder = self.client.get(request.url);
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        let resp = builder
            .send()
            .await
            .map_err(|e| MirrorError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        Ok(HttpResponse { status, body: Box::new(ReqwestBody(resp)) })
    }
}

struct ReqwestBody(reqwest::Response);

#[async_trait]
impl ResponseBody for ReqwestBody {
    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>> {
        let chunk = self
            .0
            .chunk()
            .await
            .map_err(|e| MirrorError::BodyRead(e.to_string()))?;
        Ok(chunk.map(|bytes| bytes.to_vec()))
    }
}
