//! Long-running job poller
//!
//! Submits generation requests and waits out the remote job by re-checking
//! its status at a fixed interval until it finishes, fails, or the local
//! attempt budget runs out.

use std::sync::Arc;

use genop_core::domain::job::{Job, JobOutcome, JobStatus};
use genop_core::dto::generation::GenerationRequest;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::PollPolicy;
use crate::error::{ClientError, Result};
use crate::service::GenerationService;

/// Waits on submitted jobs until they reach a terminal state
///
/// One poller serves any number of jobs; it holds nothing across calls
/// beyond the shared service handle and the policy, so concurrent jobs are
/// fully independent.
pub struct JobPoller<S> {
    service: Arc<S>,
    policy: PollPolicy,
}

impl<S: GenerationService> JobPoller<S> {
    /// Creates a new poller
    ///
    /// # Arguments
    /// * `service` - The generation service capability to poll against
    /// * `policy` - Interval and attempt budget for each wait
    pub fn new(service: Arc<S>, policy: PollPolicy) -> Self {
        Self { service, policy }
    }

    /// Submits a generation request
    ///
    /// Validates the request locally, asks the service to start the job, and
    /// wraps the returned handle in a timestamped record.
    pub async fn submit(&self, request: &GenerationRequest) -> Result<Job> {
        if request.model.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "model cannot be empty".to_string(),
            ));
        }

        if request.prompt.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "prompt cannot be empty".to_string(),
            ));
        }

        let handle = self.service.submit(request).await?;
        let job = Job::new(handle, request.model.clone());

        info!(
            "Submitted job {} to {} (handle {})",
            job.id, job.model, job.handle
        );

        Ok(job)
    }

    /// Waits until the job reaches a terminal state
    ///
    /// Checks the status once immediately, then re-checks after every
    /// `policy.interval`, up to `policy.max_attempts` more times. A terminal
    /// status returns at once with no trailing wait. Exhausting the budget
    /// while the job is still pending returns [`JobOutcome::TimedOut`]; the
    /// job may well still be running remotely, so callers can re-poll with a
    /// fresh budget or abandon it. An error on any check aborts the wait
    /// immediately and is never retried here.
    pub async fn await_completion(&self, job: &Job) -> Result<JobOutcome> {
        let mut attempts: u32 = 0;

        loop {
            let snapshot = self.service.check_status(&job.handle).await?;

            match snapshot.status {
                JobStatus::Done => {
                    let result = snapshot.result.ok_or_else(|| {
                        ClientError::Parse(
                            "job reported done without a result reference".to_string(),
                        )
                    })?;

                    info!("Job {} done after {} check(s)", job.id, attempts + 1);
                    return Ok(JobOutcome::Done(result));
                }
                JobStatus::Failed => {
                    let message = snapshot
                        .error
                        .unwrap_or_else(|| "unknown error".to_string());

                    warn!("Job {} failed: {}", job.id, message);
                    return Ok(JobOutcome::Failed(message));
                }
                JobStatus::Pending => {}
            }

            if attempts >= self.policy.max_attempts {
                warn!(
                    "Job {} still pending after {} check(s), giving up locally",
                    job.id,
                    attempts + 1
                );
                return Ok(JobOutcome::TimedOut);
            }

            debug!(
                "Job {} still pending (attempt {}/{})",
                job.id,
                attempts + 1,
                self.policy.max_attempts
            );

            sleep(self.policy.interval).await;
            attempts += 1;
        }
    }

    /// Submits a request and waits for its outcome
    pub async fn run(&self, request: &GenerationRequest) -> Result<JobOutcome> {
        let job = self.submit(request).await?;
        self.await_completion(&job).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::{Duration, Instant};

    use async_trait::async_trait;
    use genop_core::domain::job::{JobHandle, ResultRef};
    use genop_core::dto::generation::StatusSnapshot;

    /// Fake service that answers status checks from a queued script.
    ///
    /// Once the script runs out, every further check reports pending.
    struct ScriptedService {
        responses: Mutex<VecDeque<Result<StatusSnapshot>>>,
        submits: AtomicU32,
        checks: AtomicU32,
    }

    impl ScriptedService {
        fn new(responses: Vec<Result<StatusSnapshot>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                submits: AtomicU32::new(0),
                checks: AtomicU32::new(0),
            })
        }

        fn submits(&self) -> u32 {
            self.submits.load(Ordering::SeqCst)
        }

        fn checks(&self) -> u32 {
            self.checks.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerationService for ScriptedService {
        async fn submit(&self, _request: &GenerationRequest) -> Result<JobHandle> {
            self.submits.fetch_add(1, Ordering::SeqCst);
            Ok(JobHandle::new("operations/test-1"))
        }

        async fn check_status(&self, _handle: &JobHandle) -> Result<StatusSnapshot> {
            self.checks.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(StatusSnapshot::pending()))
        }

        async fn fetch_result(&self, _result: &ResultRef) -> Result<Vec<u8>> {
            Ok(b"video-bytes".to_vec())
        }
    }

    fn fast_policy(max_attempts: u32) -> PollPolicy {
        PollPolicy::new(Duration::from_millis(5), max_attempts)
    }

    fn test_job() -> Job {
        Job::new(JobHandle::new("operations/test-1"), "veo-test")
    }

    #[tokio::test]
    async fn done_on_first_check_skips_waiting() {
        let service = ScriptedService::new(vec![Ok(StatusSnapshot::done(ResultRef::new(
            "files/video-1",
        )))]);
        let poller = JobPoller::new(
            Arc::clone(&service),
            PollPolicy::new(Duration::from_millis(250), 3),
        );

        let started = Instant::now();
        let outcome = poller.await_completion(&test_job()).await.unwrap();

        assert_eq!(outcome, JobOutcome::Done(ResultRef::new("files/video-1")));
        assert_eq!(service.checks(), 1);
        assert!(started.elapsed() < Duration::from_millis(250));
    }

    #[tokio::test]
    async fn pending_then_done_waits_once() {
        let service = ScriptedService::new(vec![
            Ok(StatusSnapshot::pending()),
            Ok(StatusSnapshot::done(ResultRef::new("files/video-2"))),
        ]);
        let poller = JobPoller::new(Arc::clone(&service), fast_policy(3));

        let outcome = poller.await_completion(&test_job()).await.unwrap();

        assert_eq!(outcome, JobOutcome::Done(ResultRef::new("files/video-2")));
        assert_eq!(service.checks(), 2);
    }

    #[tokio::test]
    async fn exhausted_budget_returns_timed_out() {
        let service = ScriptedService::new(Vec::new());
        let poller = JobPoller::new(Arc::clone(&service), fast_policy(3));

        let outcome = poller.await_completion(&test_job()).await.unwrap();

        assert_eq!(outcome, JobOutcome::TimedOut);
        // Initial check plus one per budgeted attempt.
        assert_eq!(service.checks(), 4);
    }

    #[tokio::test]
    async fn timed_out_run_sleeps_through_every_interval() {
        let interval = Duration::from_millis(20);
        let service = ScriptedService::new(Vec::new());
        let poller = JobPoller::new(Arc::clone(&service), PollPolicy::new(interval, 3));

        let started = Instant::now();
        let outcome = poller.await_completion(&test_job()).await.unwrap();

        assert_eq!(outcome, JobOutcome::TimedOut);
        assert!(started.elapsed() >= interval * 3);
    }

    #[tokio::test]
    async fn failure_message_surfaces_verbatim() {
        let service = ScriptedService::new(vec![
            Ok(StatusSnapshot::pending()),
            Ok(StatusSnapshot::failed("quota exceeded for veo-test")),
        ]);
        let poller = JobPoller::new(Arc::clone(&service), fast_policy(5));

        let outcome = poller.await_completion(&test_job()).await.unwrap();

        assert_eq!(
            outcome,
            JobOutcome::Failed("quota exceeded for veo-test".to_string())
        );
        assert_eq!(service.checks(), 2);
    }

    #[tokio::test]
    async fn failure_without_message_gets_default() {
        let service = ScriptedService::new(vec![Ok(StatusSnapshot {
            status: JobStatus::Failed,
            result: None,
            error: None,
        })]);
        let poller = JobPoller::new(Arc::clone(&service), fast_policy(3));

        let outcome = poller.await_completion(&test_job()).await.unwrap();

        assert_eq!(outcome, JobOutcome::Failed("unknown error".to_string()));
    }

    #[tokio::test]
    async fn transport_error_aborts_remaining_budget() {
        let service = ScriptedService::new(vec![
            Ok(StatusSnapshot::pending()),
            Err(ClientError::transport("connection reset by peer")),
        ]);
        let poller = JobPoller::new(Arc::clone(&service), fast_policy(5));

        let err = poller.await_completion(&test_job()).await.unwrap_err();

        assert!(matches!(err, ClientError::Transport(_)));
        assert_eq!(service.checks(), 2);
    }

    #[tokio::test]
    async fn done_without_result_is_a_parse_error() {
        let service = ScriptedService::new(vec![Ok(StatusSnapshot {
            status: JobStatus::Done,
            result: None,
            error: None,
        })]);
        let poller = JobPoller::new(Arc::clone(&service), fast_policy(3));

        let err = poller.await_completion(&test_job()).await.unwrap_err();

        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[tokio::test]
    async fn submit_rejects_blank_prompt_without_calling_service() {
        let service = ScriptedService::new(Vec::new());
        let poller = JobPoller::new(Arc::clone(&service), fast_policy(3));

        let request = GenerationRequest::new("veo-test", "   ");
        let err = poller.submit(&request).await.unwrap_err();

        assert!(matches!(err, ClientError::InvalidRequest(_)));
        assert_eq!(service.submits(), 0);
    }

    #[tokio::test]
    async fn submit_rejects_blank_model() {
        let service = ScriptedService::new(Vec::new());
        let poller = JobPoller::new(Arc::clone(&service), fast_policy(3));

        let request = GenerationRequest::new("", "a coastal road at sunset");
        let err = poller.submit(&request).await.unwrap_err();

        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn run_submits_then_awaits() {
        let service = ScriptedService::new(vec![Ok(StatusSnapshot::done(ResultRef::new(
            "files/video-3",
        )))]);
        let poller = JobPoller::new(Arc::clone(&service), fast_policy(3));

        let request = GenerationRequest::new("veo-test", "a coastal road at sunset");
        let outcome = poller.run(&request).await.unwrap();

        assert!(outcome.is_done());
        assert_eq!(service.submits(), 1);
        assert_eq!(service.checks(), 1);
    }
}
