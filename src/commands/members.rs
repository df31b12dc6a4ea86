use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::api::TicketApi;
use crate::commands::{backend, print_json};
use crate::error::Result;

/// A row in the team-member table
#[derive(Tabled)]
struct MemberRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Role")]
    role: String,
}

/// List the team-member directory
pub async fn cmd_members(output_json: bool) -> Result<()> {
    let api = backend()?;
    let members = api.list_team_members().await?;

    if output_json {
        return print_json(&members);
    }

    if members.is_empty() {
        println!("No team members found.");
        return Ok(());
    }

    let rows: Vec<MemberRow> = members
        .iter()
        .map(|m| MemberRow {
            id: m.id.clone(),
            name: m.name.clone(),
            role: m.role.clone(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    Ok(())
}
