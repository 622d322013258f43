use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Payload the Lambda runtime hands to the handler.
///
/// Both fields are accepted for contract compatibility only; the pipeline
/// never reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationEvent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i64,
}

/// Per-invocation context: who asked and how long we have.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    pub request_id: String,
    pub deadline: Option<SystemTime>,
}

impl Invocation {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: SystemTime) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Build from the runtime context; a zero deadline means unbounded
    pub fn from_context(context: &lambda_runtime::Context) -> Self {
        let deadline = (context.deadline > 0)
            .then(|| UNIX_EPOCH + Duration::from_millis(context.deadline));
        Self {
            request_id: context.request_id.clone(),
            deadline,
        }
    }

    /// Time left before the deadline, saturating at zero. `None` if unbounded.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline.map(|deadline| {
            deadline
                .duration_since(SystemTime::now())
                .unwrap_or(Duration::ZERO)
        })
    }
}

/// The four pipeline steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Build,
    Execute,
    Read,
    Upload,
}

impl PipelineStage {
    pub fn as_str(self) -> &'static str {
        match self {
            PipelineStage::Build => "build",
            PipelineStage::Execute => "execute",
            PipelineStage::Read => "read",
            PipelineStage::Upload => "upload",
        }
    }
}

/// A response body drained fully into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPayload {
    pub status: u16,
    pub bytes: Vec<u8>,
}

/// An object that was written to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorOutcome {
    pub object: StoredObject,
    pub source_status: u16,
}
