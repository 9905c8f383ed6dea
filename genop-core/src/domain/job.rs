//! Job domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque token identifying a submitted job on the remote service.
///
/// Issued by the service at submission time; the client passes it back on
/// every status check and never inspects its contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobHandle(String);

impl JobHandle {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque reference to a finished job's output, used to download the bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultRef(String);

impl ResultRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResultRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remote-reported job status
///
/// Derived fresh from every status query, never cached across poll cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Pending,
    Done,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

/// Record of one submitted generation job
///
/// Created at submission time. The handle is the only link to the remote
/// job; the record is discarded once a terminal outcome is consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub handle: JobHandle,
    pub model: String,
    pub requested_at: chrono::DateTime<chrono::Utc>,
}

impl Job {
    pub fn new(handle: JobHandle, model: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            handle,
            model: model.into(),
            requested_at: chrono::Utc::now(),
        }
    }
}

/// Terminal outcome of waiting on a job
///
/// A job only moves forward: once one of these is produced, no further
/// status queries are made for the handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobOutcome {
    /// The service finished the job; the reference downloads the output.
    Done(ResultRef),
    /// The service reported the job cannot complete, message verbatim.
    Failed(String),
    /// The local attempt budget ran out while the job was still pending.
    /// The job may still be running remotely.
    TimedOut,
}

impl JobOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}
