//! Ticket card component
//!
//! A compact card showing ticket id, title, a short description excerpt,
//! deadline, and assignment details.

use iocraft::prelude::*;
use jiff::Zoned;

use crate::draft;
use crate::tui::theme::theme;
use crate::types::Ticket;

/// Props for the TicketCard component
#[derive(Default, Props)]
pub struct TicketCardProps {
    /// The ticket to display
    pub ticket: Ticket,
    /// Whether this card is selected
    pub is_selected: bool,
    /// Available width for the card content (in characters)
    pub width: Option<u32>,
}

/// Compact ticket card for the list pane
///
/// Layout:
/// ```text
/// +---------------------------+
/// | #42 Fix login redirect    |
/// | Users hitting /login are  |
/// | sent back to...           |
/// | Due 2026-09-01  Ana  Dev  |
/// +---------------------------+
/// ```
#[component]
pub fn TicketCard(props: &TicketCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let ticket = &props.ticket;

    let border_color = if props.is_selected {
        theme.border_focused
    } else {
        theme.border
    };
    let bg_color = if props.is_selected {
        Some(theme.highlight)
    } else {
        None
    };
    let text_color = if props.is_selected {
        theme.highlight_text
    } else {
        theme.text
    };
    let dim_color = if props.is_selected {
        theme.highlight_text
    } else {
        theme.text_dimmed
    };

    // Overdue deadlines stand out
    let today = Zoned::now().date();
    let overdue = draft::parse_deadline(&ticket.deadline)
        .map(|date| draft::is_past(date, today))
        .unwrap_or(false);
    let deadline_color = if overdue && !props.is_selected {
        theme.error
    } else {
        dim_color
    };

    // Card has padding_left: 1, padding_right: 1, plus two border chars
    let card_width = props.width.unwrap_or(40);
    let text_width = (card_width.saturating_sub(4) as usize).max(8);

    let description_lines = wrap_text_lines(&ticket.description, text_width, 2);

    let indicator = if props.is_selected { ">" } else { " " };

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            border_style: BorderStyle::Round,
            border_color: border_color,
            background_color: bg_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            // ID and title row
            View(flex_direction: FlexDirection::Row, overflow: Overflow::Hidden) {
                Text(
                    content: indicator,
                    color: text_color,
                    weight: Weight::Bold,
                )
                Text(
                    content: format!("#{} ", ticket.id),
                    color: if props.is_selected { theme.highlight_text } else { theme.id_color },
                    weight: Weight::Bold,
                )
                Text(
                    content: ticket.title.clone(),
                    color: text_color,
                    weight: Weight::Bold,
                )
            }
            // Description excerpt (up to 2 lines)
            #(description_lines.iter().map(|line| {
                element! {
                    Text(
                        content: format!("  {}", line),
                        color: text_color,
                    )
                }
            }))
            // Deadline, assignee, and skill badges
            View(flex_direction: FlexDirection::Row, gap: 2, overflow: Overflow::Hidden) {
                Text(
                    content: format!("  Due {}", ticket.deadline),
                    color: deadline_color,
                )
                #(ticket.assigned_to.as_ref().map(|name| {
                    element! {
                        Text(
                            content: name.clone(),
                            color: text_color,
                        )
                    }
                }))
                #(ticket.skills.iter().map(|skill| {
                    element! {
                        Text(
                            content: format!("[{}]", skill),
                            color: if props.is_selected { theme.highlight_text } else { theme.badge },
                        )
                    }
                }))
            }
        }
    }
}

/// Wrap text into at most `max_lines` lines of at most `width` characters,
/// breaking on whitespace and ending the final line with an ellipsis when
/// text remains.
pub fn wrap_text_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut truncated = false;

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if current.is_empty() {
            // Single word longer than the line; hard-truncate it
            current = word.chars().take(width).collect();
            continue;
        }

        if lines.len() + 1 == max_lines {
            truncated = true;
            break;
        }
        lines.push(std::mem::take(&mut current));
        current = word.chars().take(width).collect();
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if truncated
        && let Some(last) = lines.last_mut()
    {
        while last.chars().count() > width.saturating_sub(3) {
            last.pop();
        }
        last.push_str("...");
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text_single_line() {
        let lines = wrap_text_lines("short text", 20, 3);
        assert_eq!(lines, vec!["short text"]);
    }

    #[test]
    fn test_wrap_breaks_on_whitespace() {
        let lines = wrap_text_lines("one two three four", 9, 3);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_truncates_with_ellipsis() {
        let lines = wrap_text_lines("alpha beta gamma delta epsilon zeta", 11, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("..."));
    }

    #[test]
    fn test_wrap_long_single_word() {
        let lines = wrap_text_lines("supercalifragilistic", 8, 2);
        assert_eq!(lines[0].chars().count(), 8);
    }

    #[test]
    fn test_wrap_empty_text() {
        let lines = wrap_text_lines("", 10, 2);
        assert!(lines.is_empty());
    }
}
