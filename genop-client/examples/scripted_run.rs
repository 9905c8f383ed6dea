//! Drives the poller against an in-memory service that stays pending for a
//! few checks and then finishes.
//!
//! ```bash
//! cargo run -p genop-client --example scripted_run
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use genop_client::{
    GenerationRequest, GenerationService, JobHandle, JobOutcome, JobPoller, PollPolicy, Result,
    ResultRef, StatusSnapshot,
};

/// Reports pending for a fixed number of checks, then done.
struct SlowService {
    checks_until_done: u32,
    checks: AtomicU32,
}

#[async_trait]
impl GenerationService for SlowService {
    async fn submit(&self, request: &GenerationRequest) -> Result<JobHandle> {
        tracing::info!("Accepted prompt for {}: {}", request.model, request.prompt);
        Ok(JobHandle::new("operations/demo-1"))
    }

    async fn check_status(&self, _handle: &JobHandle) -> Result<StatusSnapshot> {
        let seen = self.checks.fetch_add(1, Ordering::SeqCst) + 1;
        if seen > self.checks_until_done {
            Ok(StatusSnapshot::done(ResultRef::new("files/demo-1.mp4")))
        } else {
            Ok(StatusSnapshot::pending())
        }
    }

    async fn fetch_result(&self, result: &ResultRef) -> Result<Vec<u8>> {
        tracing::info!("Downloading {}", result);
        Ok(vec![0u8; 1024])
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let policy = PollPolicy::default()
        .with_interval(Duration::from_millis(200))
        .with_max_attempts(10);
    policy.validate()?;

    let service = Arc::new(SlowService {
        checks_until_done: 3,
        checks: AtomicU32::new(0),
    });
    let poller = JobPoller::new(Arc::clone(&service), policy);

    let request = GenerationRequest::new(
        "veo-3.1-generate-preview",
        "Drone shot following a classic red convertible along a coastal road at sunset.",
    )
    .with_parameter("aspect_ratio", serde_json::json!("16:9"))
    .with_parameter("duration_seconds", serde_json::json!(8));

    let job = poller.submit(&request).await?;
    match poller.await_completion(&job).await? {
        JobOutcome::Done(result) => {
            let bytes = service.fetch_result(&result).await?;
            tracing::info!("Got {} bytes of video", bytes.len());
        }
        JobOutcome::Failed(message) => tracing::error!("Service rejected the job: {message}"),
        JobOutcome::TimedOut => tracing::warn!("Gave up waiting; the job may still finish remotely"),
    }

    Ok(())
}
