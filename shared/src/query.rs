//! Loading/ready/error state for data-fetching views.
//!
//! Each fetch draws a [`RequestTicket`]. Only the most recently issued ticket
//! may commit a result, so a slow stale response can never overwrite a newer
//! one regardless of the order in which they resolve.

use crate::error::SharedError;
use chrono::{DateTime, Utc};
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Idle,
    Loading,
    Ready(T),
    Errored(String),
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Idle
    }
}

/// Identifies one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// State for one data-fetching view.
#[derive(Debug, Clone, PartialEq)]
pub struct Query<T> {
    state: QueryState<T>,
    latest: u64,
    last_updated: Option<DateTime<Utc>>,
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self {
            state: QueryState::Idle,
            latest: 0,
            last_updated: None,
        }
    }
}

impl<T> Query<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fetch: flips to `Loading`, dropping whatever was displayed.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.state = QueryState::Loading;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Commits a result if `ticket` is still the latest one issued.
    /// Returns whether the result was applied.
    pub fn settle(&mut self, ticket: RequestTicket, result: Result<T, SharedError>) -> bool {
        if !self.is_current(ticket) {
            debug!(
                "Dropping stale response for request {} (latest is {})",
                ticket.0, self.latest
            );
            return false;
        }

        match result {
            Ok(data) => {
                self.state = QueryState::Ready(data);
                self.last_updated = Some(Utc::now());
            }
            Err(e) => {
                self.state = QueryState::Errored(e.to_string());
            }
        }
        true
    }

    pub fn state(&self) -> &QueryState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            QueryState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            QueryState::Errored(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, QueryState::Loading)
    }

    /// When data was last committed. Errors leave it unchanged.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }
}
