//! Core types and shared functionality for jobscraper.
//!
//! This crate provides:
//! - In-memory TTL response cache and deterministic cache keys
//! - Raw-to-canonical job normalization
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;
pub mod jobs;

pub use cache::{CacheStore, build_key};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use jobs::{NormalizedJob, RawJobRecord, normalize_job};
