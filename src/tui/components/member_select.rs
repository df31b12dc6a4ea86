//! Dropdown selector for the team-member directory
//!
//! Renders a single-select over the fetched directory. Closed, it shows the
//! selected member's label or a placeholder; open, it shows the option list
//! with a cursor. All state lives in the parent form model.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::TeamMember;

/// Placeholder shown when no member is selected
pub const NO_SELECTION_LABEL: &str = "(none)";

/// Props for the MemberSelect component
#[derive(Default, Props)]
pub struct MemberSelectProps {
    /// Label to display before the selector
    pub label: String,
    /// The fetched directory
    pub members: Vec<TeamMember>,
    /// Currently selected member id, if any
    pub selected_id: Option<String>,
    /// Whether the option list is open
    pub open: bool,
    /// Cursor position within the open option list (0 = "(none)")
    pub cursor: usize,
    /// Whether the selector has focus
    pub has_focus: bool,
}

/// Single-select dropdown over the team-member directory
#[component]
pub fn MemberSelect(props: &MemberSelectProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let label_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };

    let value = selected_label(&props.members, props.selected_id.as_deref());
    let value_color = if props.selected_id.is_some() {
        theme.text
    } else {
        theme.text_dimmed
    };

    // Option 0 clears the selection; members follow in directory order.
    let options: Vec<String> = std::iter::once(NO_SELECTION_LABEL.to_string())
        .chain(props.members.iter().map(|m| m.label()))
        .collect();

    element! {
        View(flex_direction: FlexDirection::Column) {
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(
                    content: format!("{}:", props.label),
                    color: label_color,
                )
                Text(content: value, color: value_color)
                Text(
                    content: if props.open { "▲" } else { "▼" },
                    color: label_color,
                )
            }
            #(if props.open {
                Some(element! {
                    View(
                        flex_direction: FlexDirection::Column,
                        border_style: BorderStyle::Round,
                        border_color: theme.border_focused,
                        margin_left: 2,
                    ) {
                        #(options.iter().enumerate().map(|(i, option)| {
                            let at_cursor = i == props.cursor;
                            element! {
                                View(
                                    padding_left: 1,
                                    padding_right: 1,
                                    background_color: if at_cursor { Some(theme.highlight) } else { None },
                                ) {
                                    Text(
                                        content: option.clone(),
                                        color: if at_cursor { theme.highlight_text } else { theme.text },
                                    )
                                }
                            }
                        }))
                    }
                })
            } else {
                None
            })
        }
    }
}

/// Label for the currently selected member, or the placeholder when nothing
/// is selected or the id is no longer in the directory.
pub fn selected_label(members: &[TeamMember], selected_id: Option<&str>) -> String {
    selected_id
        .and_then(|id| members.iter().find(|m| m.id == id))
        .map(|m| m.label())
        .unwrap_or_else(|| NO_SELECTION_LABEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, name: &str, role: &str) -> TeamMember {
        TeamMember {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_selected_label_formats_name_and_role() {
        let members = vec![member("1", "Ana", "Dev"), member("2", "Bo", "QA")];
        assert_eq!(selected_label(&members, Some("2")), "Bo (QA)");
    }

    #[test]
    fn test_selected_label_placeholder_when_unselected() {
        let members = vec![member("1", "Ana", "Dev")];
        assert_eq!(selected_label(&members, None), NO_SELECTION_LABEL);
    }

    #[test]
    fn test_selected_label_placeholder_when_id_unknown() {
        let members = vec![member("1", "Ana", "Dev")];
        assert_eq!(selected_label(&members, Some("99")), NO_SELECTION_LABEL);
    }
}
