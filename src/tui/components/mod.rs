//! Shared TUI components
//!
//! Reusable UI pieces composed by the ticket page: the form's member
//! dropdown, the ticket list and cards, the footer shortcuts bar, and
//! toast notifications.

pub mod footer;
pub mod member_select;
pub mod ticket_card;
pub mod ticket_list;
pub mod toast;

pub use footer::{Footer, FooterProps, Shortcut, form_shortcuts, list_shortcuts};
pub use member_select::{MemberSelect, MemberSelectProps, NO_SELECTION_LABEL, selected_label};
pub use ticket_card::{TicketCard, TicketCardProps};
pub use ticket_list::{TicketList, TicketListProps};
pub use toast::{Toast, ToastLevel, render_toast};
