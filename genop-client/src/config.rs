//! Poll policy configuration
//!
//! Defines how often and how many times a submitted job is re-checked
//! before the wait is abandoned locally.

use std::time::Duration;

const DEFAULT_INTERVAL: Duration = Duration::from_secs(6);
const DEFAULT_MAX_ATTEMPTS: u32 = 30;

/// Fixed-interval polling budget
///
/// The interval is deliberately fixed rather than backed off: an interactive
/// caller wants a "still working" signal at a steady cadence, and the attempt
/// bound keeps a stalled remote job from blocking its caller forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollPolicy {
    /// Wait between consecutive status checks
    pub interval: Duration,

    /// Upper bound on re-checks after the initial one
    pub max_attempts: u32,
}

impl PollPolicy {
    /// Creates a policy with explicit values
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Creates a policy from environment variables
    ///
    /// Expected environment variables:
    /// - GENOP_POLL_INTERVAL (optional, seconds, default: 6)
    /// - GENOP_MAX_POLLS (optional, default: 30)
    pub fn from_env() -> Self {
        let interval = std::env::var("GENOP_POLL_INTERVAL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_INTERVAL);

        let max_attempts = std::env::var("GENOP_MAX_POLLS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(DEFAULT_MAX_ATTEMPTS);

        Self {
            interval,
            max_attempts,
        }
    }

    /// Replaces the wait between checks
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Replaces the re-check budget
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Validates the policy
    ///
    /// A zero interval would busy-spin and is rejected. A zero attempt
    /// budget is legal and degrades to a single immediate check.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.interval.is_zero() {
            anyhow::bail!("poll interval must be greater than 0");
        }

        Ok(())
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL, DEFAULT_MAX_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = PollPolicy::default();
        assert_eq!(policy.interval, Duration::from_secs(6));
        assert_eq!(policy.max_attempts, 30);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_policy_validation() {
        let policy = PollPolicy::default().with_interval(Duration::ZERO);
        assert!(policy.validate().is_err());

        let policy = PollPolicy::default().with_max_attempts(0);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let policy = PollPolicy::default()
            .with_interval(Duration::from_secs(2))
            .with_max_attempts(5);

        assert_eq!(policy.interval, Duration::from_secs(2));
        assert_eq!(policy.max_attempts, 5);
    }
}
