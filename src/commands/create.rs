use owo_colors::OwoColorize;

use crate::api::TicketApi;
use crate::commands::{backend, print_json};
use crate::draft;
use crate::error::Result;
use crate::types::TicketDraft;

/// Options for creating a new ticket
pub struct CreateOptions {
    pub title: String,
    pub description: String,
    pub deadline: String,
    /// Member id for the skill field
    pub skill: Option<String>,
    pub json: bool,
}

/// Create a ticket on the backend
pub async fn cmd_create(options: CreateOptions) -> Result<()> {
    let CreateOptions {
        title,
        description,
        deadline,
        skill,
        json,
    } = options;

    let ticket_draft = TicketDraft {
        title,
        description,
        deadline,
        skills: skill.into_iter().collect(),
    };
    draft::validate(&ticket_draft)?;

    let api = backend()?;
    let ticket = api.create_ticket(&ticket_draft).await?;

    if json {
        return print_json(&ticket);
    }

    println!(
        "{} {} {}",
        "Created".green().bold(),
        format!("#{}", ticket.id).cyan(),
        ticket.title
    );
    if let Some(assignee) = &ticket.assigned_to {
        println!("  assigned to {}", assignee);
    }

    Ok(())
}
