//! Draft validation.
//!
//! Validation is a pure function of the draft: it either passes, or returns
//! per-field messages for the form to render. No field is mutated and no IO
//! happens here.

use jiff::civil::Date;

use crate::types::TicketDraft;

/// Minimum length for title and description, in characters.
pub const MIN_TEXT_LEN: usize = 3;

/// Per-field validation messages. A `None` field passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.deadline.is_none()
    }

    /// All messages in field order, for non-interactive output.
    pub fn messages(&self) -> Vec<&str> {
        [&self.title, &self.description, &self.deadline]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

/// Validate a draft against the create-ticket rules.
///
/// Title and description must be at least [`MIN_TEXT_LEN`] characters after
/// trimming; the deadline must be present and parse as a calendar date.
pub fn validate(draft: &TicketDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if draft.title.trim().chars().count() < MIN_TEXT_LEN {
        errors.title = Some(format!(
            "Title must be at least {} characters.",
            MIN_TEXT_LEN
        ));
    }
    if draft.description.trim().chars().count() < MIN_TEXT_LEN {
        errors.description = Some(format!(
            "Description must be at least {} characters.",
            MIN_TEXT_LEN
        ));
    }
    if let Err(message) = parse_deadline(&draft.deadline) {
        errors.deadline = Some(message);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Parse a deadline string into a calendar date.
pub fn parse_deadline(s: &str) -> Result<Date, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Deadline is required.".to_string());
    }
    s.parse::<Date>()
        .map_err(|_| "Deadline must be a valid date (YYYY-MM-DD).".to_string())
}

/// Whether a deadline falls before the given day. The form uses this to
/// annotate past dates; validation itself is syntactic only.
pub fn is_past(deadline: Date, today: Date) -> bool {
    deadline < today
}
