//! Search session state for interactive front ends.
//!
//! A session remembers the last submitted search and publishes every state
//! change on a [`watch`] channel, so a view can render loading, results, or an
//! error message without owning any of the search logic.
//!
//! When searches overlap, only the most recently started one may publish its
//! result. An older call still runs to completion (and still fills the cache),
//! but its outcome is discarded.

use crate::jobs::{CacheStatus, JobsService, SearchOutcome, SearchRequest};
use crate::request::SendOptions;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

/// What a front end should currently display.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Success(SearchOutcome),
    Error(String),
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }
}

/// Drives searches on behalf of a single view.
pub struct SearchSession {
    service: JobsService,
    state: watch::Sender<SearchState>,
    last_request: Mutex<Option<SearchRequest>>,
    generation: AtomicU64,
}

impl SearchSession {
    pub fn new(service: JobsService) -> Self {
        let (state, _) = watch::channel(SearchState::Idle);
        Self { service, state, last_request: Mutex::new(None), generation: AtomicU64::new(0) }
    }

    pub fn service(&self) -> &JobsService {
        &self.service
    }

    /// Receive every subsequent state change.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Current state.
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// The most recently submitted search, if any.
    pub fn last_request(&self) -> Option<SearchRequest> {
        self.last_request.lock().clone()
    }

    /// Submit a search, serving it from the cache when possible.
    pub async fn run_search(&self, request: SearchRequest) -> SearchState {
        self.run(request, SendOptions::default()).await
    }

    /// Repeat the last search, bypassing the cache.
    ///
    /// Returns `None` if no search has been submitted yet.
    pub async fn retry(&self) -> Option<SearchState> {
        let request = self.last_request()?;
        Some(self.run(request, SendOptions::bypass()).await)
    }

    /// Clear the whole cache, then repeat the last search bypassing it.
    ///
    /// The cache is cleared even when there is nothing to repeat.
    pub async fn clear_cache_and_refresh(&self) -> Option<SearchState> {
        self.service.clear_cache();
        self.retry().await
    }

    /// Cache status of the last search.
    pub fn cache_status(&self) -> CacheStatus {
        self.last_request()
            .map(|request| self.service.cache_status(&request))
            .unwrap_or_default()
    }

    async fn run(&self, request: SearchRequest, options: SendOptions) -> SearchState {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.last_request.lock() = Some(request.clone());
        self.state.send_replace(SearchState::Loading);

        let next = match self.service.run_search(&request, options).await {
            Ok(outcome) => SearchState::Success(outcome),
            Err(err) => SearchState::Error(err.user_message().to_string()),
        };

        if self.generation.load(Ordering::SeqCst) == generation {
            self.state.send_replace(next.clone());
        } else {
            tracing::debug!(generation, "discarding superseded search result");
        }

        next
    }
}
