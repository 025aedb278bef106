//! Client code for jobscraper.
//!
//! This crate provides the outbound transport, the cache-aware request
//! client, and the job search service and session shared by the server and
//! any other front end.

pub mod jobs;
pub mod request;
pub mod session;
pub mod transport;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use jobs::{CacheStatus, JobsError, JobsResponse, JobsService, SearchOutcome, SearchRequest};
pub use request::{FALLBACK_ERROR_MESSAGE, Fetched, RequestClient, RequestError, SendOptions};
pub use session::{SearchSession, SearchState};
pub use transport::{ApiRequest, HttpConfig, HttpTransport, Transport, TransportError};
