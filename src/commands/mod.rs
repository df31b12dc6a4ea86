mod board;
mod create;
mod ls;
mod members;

pub use board::cmd_board;
pub use create::{CreateOptions, cmd_create};
pub use ls::cmd_ls;
pub use members::cmd_members;

use crate::api::HttpTicketApi;
use crate::config::Config;
use crate::error::Result;

/// Build the backend client from the resolved configuration.
fn backend() -> Result<HttpTicketApi> {
    let config = Config::load()?;
    HttpTicketApi::from_config(&config)
}

/// Print a value as pretty JSON
fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
