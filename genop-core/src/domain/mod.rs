//! Core domain types
//!
//! This module contains the domain structures shared between the poller and
//! any calling application. They represent submitted generation jobs and the
//! terminal outcomes a caller consumes.

pub mod job;
