pub mod api;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;
pub mod tui;
pub mod types;

pub use api::{FetchState, HttpTicketApi, TicketApi};
pub use config::Config;
pub use draft::{FieldErrors, MIN_TEXT_LEN, parse_deadline, validate};
pub use error::{Result, TixError};
pub use types::{TeamMember, Ticket, TicketDraft};
