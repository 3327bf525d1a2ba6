//!
//! Traits Module
//!
//! This module contains core traits used throughout the reviewer system for extensibility and abstraction.
//!
//! - [`backend`]: The generative text service the AI reviewer calls.
//! - [`extractor`]: One tier of the structured-data extraction chain.
//! - [`feedback`]: Pluggable reviewer strategies and the entries they produce.
//! - [`store`]: Where finished feedback entries are handed off.

pub mod backend;
pub mod extractor;
pub mod feedback;
pub mod store;
