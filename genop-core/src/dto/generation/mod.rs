//! Generation request and status DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job::{JobStatus, ResultRef};

/// Request to start a new generation job
///
/// `parameters` carries provider-specific options (aspect ratio, resolution,
/// duration, seed, ...) as opaque values. This crate never interprets them;
/// the service adapter forwards them as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub parameters: std::collections::HashMap<String, serde_json::Value>,
}

impl GenerationRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            parameters: std::collections::HashMap::new(),
        }
    }

    /// Attach a provider-specific option.
    pub fn with_parameter(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }
}

/// Answer to one status query
///
/// `result` is meaningful only when `status` is `Done`; `error` only when
/// `status` is `Failed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub status: JobStatus,
    pub result: Option<ResultRef>,
    pub error: Option<String>,
}

impl StatusSnapshot {
    /// Snapshot of a job that is still running.
    pub fn pending() -> Self {
        Self {
            status: JobStatus::Pending,
            result: None,
            error: None,
        }
    }

    /// Snapshot of a finished job with its output reference.
    pub fn done(result: ResultRef) -> Self {
        Self {
            status: JobStatus::Done,
            result: Some(result),
            error: None,
        }
    }

    /// Snapshot of a job the service gave up on.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: JobStatus::Failed,
            result: None,
            error: Some(message.into()),
        }
    }
}
