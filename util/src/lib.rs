//! Shared utilities for the lesson review workspace.
//!
//! - [`config`]: process-wide configuration loaded from `.env` and the environment.

pub mod config;
