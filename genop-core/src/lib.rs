//! Genop Core
//!
//! Core types for the genop long-running generation job protocol.
//!
//! This crate contains:
//! - Domain types: submitted jobs, their handles, and terminal outcomes
//! - DTOs: request and status shapes exchanged with a generation service

pub mod domain;
pub mod dto;
