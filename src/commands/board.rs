//! Ticket board command (`tix board`)
//!
//! Launches the fullscreen TUI with the create form and the fetched ticket
//! list.

use iocraft::prelude::*;

use crate::error::{Result, TixError};
use crate::tui::TicketPage;

/// Launch the ticket board TUI
pub async fn cmd_board() -> Result<()> {
    element!(TicketPage)
        .fullscreen()
        .await
        .map_err(|e| TixError::Other(format!("TUI error: {e}")))
}
