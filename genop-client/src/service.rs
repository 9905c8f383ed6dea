//! Generation service boundary

use async_trait::async_trait;
use genop_core::domain::job::{JobHandle, ResultRef};
use genop_core::dto::generation::{GenerationRequest, StatusSnapshot};

use crate::error::Result;

/// Capability handle onto an external generation service
///
/// Implementations adapt one provider SDK or API to the three primitives the
/// poller needs. The capability is constructed by the caller and passed in
/// explicitly; nothing in this crate holds a process-wide client.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Start a long-running generation job
    ///
    /// # Returns
    /// The opaque handle used for all further status queries.
    async fn submit(&self, request: &GenerationRequest) -> Result<JobHandle>;

    /// Read the job's current status
    ///
    /// Must be read-only: repeated calls never advance or disturb the job.
    async fn check_status(&self, handle: &JobHandle) -> Result<StatusSnapshot>;

    /// Download the finished output bytes
    async fn fetch_result(&self, result: &ResultRef) -> Result<Vec<u8>>;
}
