//! Backend API access.
//!
//! All network access goes through the [`TicketApi`] interface so UI
//! components depend on an interface rather than a concrete transport, and
//! tests can substitute fakes. [`http::HttpTicketApi`] is the production
//! implementation.

pub mod http;

use crate::error::Result;
use crate::types::{TeamMember, Ticket, TicketDraft};

pub use http::HttpTicketApi;

/// Common interface to the ticket backend
pub trait TicketApi: Send + Sync {
    /// Fetch the full ticket collection
    fn list_tickets(&self) -> impl std::future::Future<Output = Result<Vec<Ticket>>> + Send;

    /// Create a new ticket and return the server's record of it
    fn create_ticket(
        &self,
        draft: &TicketDraft,
    ) -> impl std::future::Future<Output = Result<Ticket>> + Send;

    /// Fetch the team-member directory
    fn list_team_members(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<TeamMember>>> + Send;
}

/// Outcome of an asynchronous fetch, threaded into every consuming
/// component. Failure carries the human-readable reason so the UI can show
/// it instead of silently dropping it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Success(T),
    Failure(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            FetchState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            FetchState::Failure(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => FetchState::Success(value),
            Err(e) => FetchState::Failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TixError;

    #[test]
    fn test_fetch_state_accessors() {
        let loading: FetchState<Vec<u8>> = FetchState::Loading;
        assert!(loading.is_loading());
        assert!(loading.success().is_none());
        assert!(loading.failure().is_none());

        let ok = FetchState::Success(vec![1u8]);
        assert_eq!(ok.success(), Some(&vec![1u8]));

        let failed: FetchState<Vec<u8>> = FetchState::Failure("boom".to_string());
        assert_eq!(failed.failure(), Some("boom"));
    }

    #[test]
    fn test_from_result_maps_error_text() {
        let state: FetchState<()> =
            FetchState::from_result(Err(TixError::Config("bad".to_string())));
        assert_eq!(state.failure(), Some("configuration error: bad"));
    }
}
