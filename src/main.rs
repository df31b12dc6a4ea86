use clap::{Parser, Subcommand};
use std::process::ExitCode;

use tix::commands::{CreateOptions, cmd_board, cmd_create, cmd_ls, cmd_members};

#[derive(Parser)]
#[command(name = "tix")]
#[command(about = "Terminal client for the ticket backend")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive ticket board (default)
    Board,

    /// List all tickets
    Ls {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the team-member directory
    Members {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new ticket
    #[command(visible_alias = "c")]
    Create {
        /// Ticket title (at least 3 characters)
        title: String,

        /// Description text (at least 3 characters)
        #[arg(short, long)]
        description: String,

        /// Deadline date (YYYY-MM-DD)
        #[arg(long)]
        deadline: String,

        /// Team-member id for the skill field
        #[arg(long)]
        skill: Option<String>,

        /// Output the created ticket as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None | Some(Commands::Board) => cmd_board().await,
        Some(Commands::Ls { json }) => cmd_ls(json).await,
        Some(Commands::Members { json }) => cmd_members(json).await,
        Some(Commands::Create {
            title,
            description,
            deadline,
            skill,
            json,
        }) => {
            cmd_create(CreateOptions {
                title,
                description,
                deadline,
                skill,
                json,
            })
            .await
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
