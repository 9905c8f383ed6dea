//! Data transfer objects
//!
//! Request and status shapes exchanged with a generation service.

pub mod generation;
