//! Scrollable ticket list component
//!
//! Displays fetched tickets as cards with selection highlighting and
//! scrolling support. Loading and failure states are rendered by the parent;
//! this component only sees a concrete list.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::Ticket;

use super::ticket_card::TicketCard;

/// Props for the TicketList component
#[derive(Default, Props)]
pub struct TicketListProps {
    /// Tickets to display
    pub tickets: Vec<Ticket>,
    /// Index of the currently selected ticket
    pub selected_index: usize,
    /// Current scroll offset (first visible ticket index)
    pub scroll_offset: usize,
    /// Whether the list has focus
    pub has_focus: bool,
    /// Number of cards that fit in the visible area
    /// NOTE: passed from the parent because the "X more above/below"
    /// indicators need to know how many cards the pane can show.
    pub visible_count: usize,
    /// Width available for card content (in characters)
    pub width: Option<u32>,
}

/// Scrollable list of ticket cards
#[component]
pub fn TicketList(props: &TicketListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    if props.tickets.is_empty() {
        return element! {
            View(
                width: 100pct,
                height: 100pct,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: border_color,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(
                    content: "No tickets yet",
                    color: theme.text_dimmed,
                )
                Text(
                    content: "Fill in the form to create one",
                    color: theme.text_dimmed,
                )
            }
        };
    }

    let start = props.scroll_offset.min(props.tickets.len().saturating_sub(1));
    let total = props.tickets.len();
    let visible = props.visible_count.max(1);
    let end = (start + visible).min(total);

    let has_more_above = start > 0;
    let has_more_below = end < total;

    let visible_tickets: Vec<_> = props.tickets[start..end].to_vec();

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            overflow: Overflow::Hidden,
        ) {
            // "More above" indicator
            #(if has_more_above {
                Some(element! {
                    View(height: 1, padding_left: 1, flex_shrink: 0.0) {
                        Text(
                            content: format!("  {} more above", start),
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })

            // Ticket cards
            #(visible_tickets.iter().enumerate().map(|(i, ticket)| {
                let actual_index = start + i;
                element! {
                    TicketCard(
                        ticket: ticket.clone(),
                        is_selected: props.has_focus && actual_index == props.selected_index,
                        width: props.width,
                    )
                }
            }))

            // "More below" indicator
            #(if has_more_below {
                Some(element! {
                    View(height: 1, padding_left: 1, flex_shrink: 0.0) {
                        Text(
                            content: format!("  {} more below", total - end),
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })
        }
    }
}
