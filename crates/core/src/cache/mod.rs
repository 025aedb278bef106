//! In-memory cache for job search responses.
//!
//! This module provides a process-lifetime, TTL-bounded cache. It supports:
//!
//! - Lazy expiry: stale entries are dropped when next read
//! - Order-independent, namespaced cache keys using SHA-256 hashing
//! - Explicit invalidation of one key or the whole store
//!
//! Nothing is persisted; the cache starts empty on every launch.

pub mod key;
pub mod store;

pub use key::{JOBS_NAMESPACE, build_key, build_namespaced_key};
pub use store::{CacheEntry, CacheStore, DEFAULT_TTL};
