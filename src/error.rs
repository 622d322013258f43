use thiserror::Error;

use crate::domain::PipelineStage;

#[derive(Error, Debug)]
pub enum MirrorError {
    #[error("failed to build request: {0}")]
    Construction(String),

    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("failed to read response body: {0}")]
    BodyRead(String),

    #[error("upload failed: {0}")]
    Upload(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("invocation deadline exceeded")]
    DeadlineExceeded,
}

impl MirrorError {
    /// Stable label used for metrics and structured fields
    pub fn kind(&self) -> &'static str {
        match self {
            MirrorError::Construction(_) => "construction",
            MirrorError::Transport(_) => "transport",
            MirrorError::BodyRead(_) => "io",
            MirrorError::Upload(_) => "upload",
            MirrorError::Config(_) => "config",
            MirrorError::DeadlineExceeded => "deadline",
        }
    }

    /// Pipeline step the error is attributed to, if any
    pub fn stage(&self) -> Option<PipelineStage> {
        match self {
            MirrorError::Construction(_) => Some(PipelineStage::Build),
            MirrorError::Transport(_) => Some(PipelineStage::Execute),
            MirrorError::BodyRead(_) => Some(PipelineStage::Read),
            MirrorError::Upload(_) | MirrorError::Config(_) => Some(PipelineStage::Upload),
            MirrorError::DeadlineExceeded => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MirrorError>;
