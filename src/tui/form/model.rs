//! Create-ticket form state
//!
//! All form logic that does not touch the terminal lives here: field focus,
//! dropdown state, draft assembly, and the submit decision. The component in
//! the parent module renders this and forwards key events.

use crate::draft::{self, FieldErrors};
use crate::types::{TeamMember, TicketDraft};

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Deadline,
    Skill,
}

impl FormField {
    /// Get the next field (wrapping)
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Deadline,
            FormField::Deadline => FormField::Skill,
            FormField::Skill => FormField::Title,
        }
    }

    /// Get the previous field (wrapping)
    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Skill,
            FormField::Description => FormField::Title,
            FormField::Deadline => FormField::Description,
            FormField::Skill => FormField::Deadline,
        }
    }
}

/// Complete state of the create-ticket form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormModel {
    pub title: String,
    pub description: String,
    pub deadline: String,
    /// Selected member id for the skill field, if any
    pub selected_skill: Option<String>,
    pub focused: FormField,
    pub dropdown_open: bool,
    /// Cursor within the open dropdown; 0 clears the selection, i > 0 maps
    /// to directory entry i - 1
    pub dropdown_cursor: usize,
    /// Messages from the last blocked submit, cleared on the next attempt
    pub errors: FieldErrors,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble the request body from the current field values.
    pub fn draft(&self) -> TicketDraft {
        TicketDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            deadline: self.deadline.clone(),
            skills: self.selected_skill.iter().cloned().collect(),
        }
    }

    /// Reset every field to its initial value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Open the dropdown with the cursor on the current selection.
    pub fn open_dropdown(&mut self, members: &[TeamMember]) {
        self.dropdown_open = true;
        self.dropdown_cursor = self
            .selected_skill
            .as_deref()
            .and_then(|id| members.iter().position(|m| m.id == id))
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// Move the dropdown cursor, wrapping at both ends. The option count
    /// includes the leading clear entry.
    pub fn dropdown_move(&mut self, delta: isize, option_count: usize) {
        if option_count == 0 {
            return;
        }
        let count = option_count as isize;
        let cursor = self.dropdown_cursor as isize;
        self.dropdown_cursor = (cursor + delta).rem_euclid(count) as usize;
    }

    /// Commit the option under the cursor and close the dropdown.
    pub fn choose_member(&mut self, members: &[TeamMember]) {
        self.selected_skill = if self.dropdown_cursor == 0 {
            None
        } else {
            members.get(self.dropdown_cursor - 1).map(|m| m.id.clone())
        };
        self.dropdown_open = false;
    }
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision {
    /// Validation passed; dispatch this draft
    Submit(TicketDraft),
    /// Validation failed; the messages are also stored on the model
    Blocked(FieldErrors),
    /// A previous create is still pending; ignore the attempt
    InFlight,
}

/// Decide what a submit keypress does.
///
/// An in-flight create always wins over validation, so a second Ctrl+S while
/// the first request is pending can never produce a duplicate ticket.
pub fn submit_decision(model: &mut FormModel, in_flight: bool) -> SubmitDecision {
    if in_flight {
        return SubmitDecision::InFlight;
    }

    match draft::validate(&model.draft()) {
        Ok(()) => {
            model.errors = FieldErrors::default();
            SubmitDecision::Submit(model.draft())
        }
        Err(errors) => {
            model.errors = errors.clone();
            SubmitDecision::Blocked(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members() -> Vec<TeamMember> {
        vec![
            TeamMember {
                id: "1".to_string(),
                name: "Ana".to_string(),
                role: "Dev".to_string(),
            },
            TeamMember {
                id: "2".to_string(),
                name: "Bo".to_string(),
                role: "QA".to_string(),
            },
        ]
    }

    fn filled_model() -> FormModel {
        FormModel {
            title: "Fix login".to_string(),
            description: "Redirect loop on /login".to_string(),
            deadline: "2026-09-01".to_string(),
            ..FormModel::default()
        }
    }

    #[test]
    fn test_field_navigation_wraps() {
        assert_eq!(FormField::Title.next(), FormField::Description);
        assert_eq!(FormField::Skill.next(), FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::Skill);
    }

    #[test]
    fn test_submit_blocked_reports_every_invalid_field() {
        let mut model = FormModel::new();
        let decision = submit_decision(&mut model, false);
        match decision {
            SubmitDecision::Blocked(errors) => {
                assert!(errors.title.is_some());
                assert!(errors.description.is_some());
                assert!(errors.deadline.is_some());
            }
            other => panic!("expected Blocked, got {:?}", other),
        }
        assert!(!model.errors.is_empty());
    }

    #[test]
    fn test_submit_valid_produces_draft_and_clears_errors() {
        let mut model = filled_model();
        model.errors.title = Some("stale".to_string());

        match submit_decision(&mut model, false) {
            SubmitDecision::Submit(draft) => {
                assert_eq!(draft.title, "Fix login");
                assert!(draft.skills.is_empty());
            }
            other => panic!("expected Submit, got {:?}", other),
        }
        assert!(model.errors.is_empty());
    }

    #[test]
    fn test_submit_in_flight_blocks_even_valid_drafts() {
        let mut model = filled_model();
        assert_eq!(submit_decision(&mut model, true), SubmitDecision::InFlight);
    }

    #[test]
    fn test_draft_carries_selected_skill() {
        let mut model = filled_model();
        model.selected_skill = Some("2".to_string());
        assert_eq!(model.draft().skills, vec!["2".to_string()]);
    }

    #[test]
    fn test_dropdown_opens_on_current_selection() {
        let mut model = FormModel::new();
        model.selected_skill = Some("2".to_string());
        model.open_dropdown(&members());
        assert!(model.dropdown_open);
        assert_eq!(model.dropdown_cursor, 2);

        model.selected_skill = None;
        model.open_dropdown(&members());
        assert_eq!(model.dropdown_cursor, 0);
    }

    #[test]
    fn test_dropdown_cursor_wraps() {
        let mut model = FormModel::new();
        // 3 options: clear + 2 members
        model.dropdown_move(-1, 3);
        assert_eq!(model.dropdown_cursor, 2);
        model.dropdown_move(1, 3);
        assert_eq!(model.dropdown_cursor, 0);
    }

    #[test]
    fn test_choose_member_sets_and_clears_selection() {
        let mut model = FormModel::new();
        let directory = members();

        model.open_dropdown(&directory);
        model.dropdown_move(1, 3);
        model.choose_member(&directory);
        assert_eq!(model.selected_skill.as_deref(), Some("1"));
        assert!(!model.dropdown_open);

        model.open_dropdown(&directory);
        model.dropdown_move(-1, 3);
        model.choose_member(&directory);
        assert_eq!(model.selected_skill.as_deref(), Some("2"));

        model.open_dropdown(&directory);
        model.dropdown_cursor = 0;
        model.choose_member(&directory);
        assert!(model.selected_skill.is_none());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut model = filled_model();
        model.selected_skill = Some("1".to_string());
        model.errors.title = Some("x".to_string());
        model.clear();
        assert_eq!(model, FormModel::default());
    }
}
