use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::api::TicketApi;
use crate::commands::{backend, print_json};
use crate::error::Result;
use crate::types::Ticket;

/// A row in the ticket list table
#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
    #[tabled(rename = "Assignee")]
    assignee: String,
    #[tabled(rename = "Skills")]
    skills: String,
}

impl From<&Ticket> for TicketRow {
    fn from(ticket: &Ticket) -> Self {
        TicketRow {
            id: ticket.id,
            title: ticket.title.clone(),
            deadline: ticket.deadline.clone(),
            assignee: ticket.assigned_to.clone().unwrap_or_default(),
            skills: ticket.skills.join(", "),
        }
    }
}

/// List all tickets from the backend
pub async fn cmd_ls(output_json: bool) -> Result<()> {
    let api = backend()?;
    let tickets = api.list_tickets().await?;

    if output_json {
        return print_json(&tickets);
    }

    if tickets.is_empty() {
        println!("No tickets found.");
        return Ok(());
    }

    let rows: Vec<TicketRow> = tickets.iter().map(TicketRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!("{}", format!("{} ticket(s)", tickets.len()).dimmed());

    Ok(())
}
