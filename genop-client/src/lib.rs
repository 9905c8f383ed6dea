//! Genop Client
//!
//! Client-side protocol for long-running generation jobs: submit a request
//! to a generation service, re-check the job at a fixed interval until it
//! finishes, fails, or the local attempt budget runs out, and hand the
//! caller exactly one unambiguous outcome.
//!
//! The service itself is a capability the caller constructs and passes in;
//! this crate ships no transport of its own. A remote failure, a local
//! timeout, and a broken status check stay distinct all the way up:
//! `Ok(Done)` / `Ok(Failed)` / `Ok(TimedOut)` / `Err(ClientError)`.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use genop_client::{
//!     GenerationRequest, GenerationService, JobHandle, JobOutcome, JobPoller, PollPolicy,
//!     Result, ResultRef, StatusSnapshot,
//! };
//!
//! struct MyProvider;
//!
//! #[async_trait]
//! impl GenerationService for MyProvider {
//!     async fn submit(&self, _request: &GenerationRequest) -> Result<JobHandle> {
//!         Ok(JobHandle::new("operations/demo-1"))
//!     }
//!
//!     async fn check_status(&self, _handle: &JobHandle) -> Result<StatusSnapshot> {
//!         Ok(StatusSnapshot::done(ResultRef::new("files/demo-1.mp4")))
//!     }
//!
//!     async fn fetch_result(&self, _result: &ResultRef) -> Result<Vec<u8>> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = Arc::new(MyProvider);
//!     let poller = JobPoller::new(Arc::clone(&service), PollPolicy::default());
//!
//!     let request = GenerationRequest::new(
//!         "veo-3.1-generate-preview",
//!         "Drone shot following a red convertible along a coastal road at sunset.",
//!     );
//!
//!     match poller.run(&request).await? {
//!         JobOutcome::Done(result) => {
//!             let bytes = service.fetch_result(&result).await?;
//!             println!("downloaded {} bytes", bytes.len());
//!         }
//!         JobOutcome::Failed(message) => eprintln!("generation failed: {message}"),
//!         JobOutcome::TimedOut => eprintln!("gave up waiting; the job may still finish"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod poller;
pub mod service;

// Re-export commonly used types
pub use config::PollPolicy;
pub use error::{ClientError, Result};
pub use genop_core::domain::job::{Job, JobHandle, JobOutcome, JobStatus, ResultRef};
pub use genop_core::dto::generation::{GenerationRequest, StatusSnapshot};
pub use poller::JobPoller;
pub use service::GenerationService;
