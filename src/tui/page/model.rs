//! Ticket page state
//!
//! The page model owns everything that changes in response to backend
//! responses: the fetched ticket collection, the in-flight create flag, and
//! the current toast. Keeping it separate from the component makes the
//! transitions directly testable.

use crate::api::FetchState;
use crate::tui::components::Toast;
use crate::types::Ticket;

/// State of the ticket page
#[derive(Debug, Clone, Default)]
pub struct PageModel {
    /// The fetched ticket collection
    pub tickets: FetchState<Vec<Ticket>>,
    /// Whether a create request is pending
    pub submitting: bool,
    /// Most recent notification, replaced rather than stacked
    pub toast: Option<Toast>,
}

impl PageModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a ticket list fetch.
    pub fn tickets_loaded(&mut self, result: Result<Vec<Ticket>, String>) {
        self.tickets = match result {
            Ok(tickets) => FetchState::Success(tickets),
            Err(reason) => FetchState::Failure(reason),
        };
    }

    /// Mark a refetch in progress, discarding the previous outcome.
    pub fn reload_tickets(&mut self) {
        self.tickets = FetchState::Loading;
    }

    /// Try to start a create request. Returns false when one is already
    /// pending, in which case the caller must not dispatch another.
    pub fn begin_create(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Record the outcome of a create request.
    ///
    /// On success the server's ticket is appended to the displayed
    /// collection; a list that never loaded is promoted to a one-element
    /// success so the created ticket is still visible. On failure the
    /// collection is left untouched and the reason surfaces as a toast.
    pub fn finish_create(&mut self, result: Result<Ticket, String>) {
        self.submitting = false;
        match result {
            Ok(ticket) => {
                let id = ticket.id;
                match &mut self.tickets {
                    FetchState::Success(tickets) => tickets.push(ticket),
                    _ => self.tickets = FetchState::Success(vec![ticket]),
                }
                self.toast = Some(Toast::success(format!("Created ticket #{}", id)));
            }
            Err(reason) => {
                self.toast = Some(Toast::error(format!("Create failed: {}", reason)));
            }
        }
    }

    /// Number of tickets currently displayed.
    pub fn ticket_count(&self) -> usize {
        self.tickets.success().map(Vec::len).unwrap_or(0)
    }
}

/// Clamp a selection index to the displayed collection.
pub fn clamp_selection(selected: usize, count: usize) -> usize {
    selected.min(count.saturating_sub(1))
}

/// Scroll offset keeping `selected` within the `visible`-card window.
pub fn scroll_for(selected: usize, scroll: usize, visible: usize) -> usize {
    let visible = visible.max(1);
    if selected < scroll {
        selected
    } else if selected >= scroll + visible {
        selected + 1 - visible
    } else {
        scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::ToastLevel;

    fn ticket(id: u64, title: &str) -> Ticket {
        Ticket {
            id,
            title: title.to_string(),
            description: "d".to_string(),
            deadline: "2026-09-01".to_string(),
            assigned_to: None,
            skills: vec![],
        }
    }

    #[test]
    fn test_starts_loading() {
        let model = PageModel::new();
        assert!(model.tickets.is_loading());
        assert!(!model.submitting);
        assert!(model.toast.is_none());
    }

    #[test]
    fn test_successful_create_appends_in_order() {
        let mut model = PageModel::new();
        model.tickets_loaded(Ok(vec![ticket(1, "first"), ticket(2, "second")]));

        assert!(model.begin_create());
        model.finish_create(Ok(ticket(3, "third")));

        let tickets = model.tickets.success().unwrap();
        assert_eq!(
            tickets.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(!model.submitting);
        assert_eq!(model.toast.unwrap().level, ToastLevel::Success);
    }

    #[test]
    fn test_failed_create_leaves_list_unchanged() {
        let mut model = PageModel::new();
        model.tickets_loaded(Ok(vec![ticket(1, "only")]));

        assert!(model.begin_create());
        model.finish_create(Err("backend returned HTTP 500".to_string()));

        assert_eq!(model.ticket_count(), 1);
        assert!(!model.submitting);
        let toast = model.toast.unwrap();
        assert_eq!(toast.level, ToastLevel::Error);
        assert!(toast.message.contains("HTTP 500"));
    }

    #[test]
    fn test_begin_create_blocks_while_pending() {
        let mut model = PageModel::new();
        assert!(model.begin_create());
        assert!(!model.begin_create());
        model.finish_create(Ok(ticket(1, "t")));
        assert!(model.begin_create());
    }

    #[test]
    fn test_create_promotes_unloaded_list() {
        let mut model = PageModel::new();
        model.tickets_loaded(Err("timed out".to_string()));

        assert!(model.begin_create());
        model.finish_create(Ok(ticket(9, "t")));
        assert_eq!(model.ticket_count(), 1);
    }

    #[test]
    fn test_list_failure_is_recorded() {
        let mut model = PageModel::new();
        model.tickets_loaded(Err("connection refused".to_string()));
        assert_eq!(model.tickets.failure(), Some("connection refused"));
        assert_eq!(model.ticket_count(), 0);
    }

    #[test]
    fn test_reload_resets_to_loading() {
        let mut model = PageModel::new();
        model.tickets_loaded(Ok(vec![ticket(1, "t")]));
        model.reload_tickets();
        assert!(model.tickets.is_loading());
    }

    #[test]
    fn test_clamp_selection() {
        assert_eq!(clamp_selection(5, 3), 2);
        assert_eq!(clamp_selection(1, 3), 1);
        assert_eq!(clamp_selection(0, 0), 0);
    }

    #[test]
    fn test_scroll_follows_selection() {
        // moving down past the window
        assert_eq!(scroll_for(4, 0, 3), 2);
        // moving up above the window
        assert_eq!(scroll_for(1, 2, 3), 1);
        // selection already visible
        assert_eq!(scroll_for(3, 2, 3), 2);
    }
}
