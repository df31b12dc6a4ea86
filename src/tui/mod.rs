//! TUI module for the interactive ticket board
//!
//! The board is a single fullscreen page: the create form on the left and
//! the fetched ticket list on the right.

pub mod components;
pub mod form;
pub mod page;
pub mod theme;

pub use form::{TicketForm, TicketFormProps};
pub use page::{PageModel, TicketPage};
pub use theme::Theme;
