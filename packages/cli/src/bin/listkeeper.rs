use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process;

mod cli;

use cli::items::ItemsCommands;
use listkeeper_cli::{config::api_url, init_tracing, run_server, ChecklistClient, Config};

#[derive(Parser)]
#[command(name = "listkeeper")]
#[command(about = "Listkeeper - a small checklist service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port to listen on (overrides LISTKEEPER_PORT)
        #[arg(long)]
        port: Option<u16>,
        /// SQLite database file (overrides LISTKEEPER_DATABASE_PATH)
        #[arg(long)]
        database: Option<PathBuf>,
    },
    /// Manage checklist items through a running server
    Items {
        /// Base URL of the server (overrides LISTKEEPER_API_URL)
        #[arg(long, global = true)]
        api_url: Option<String>,
        #[command(subcommand)]
        command: ItemsCommands,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = handle_command(cli.command).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve { port, database } => {
            init_tracing();
            let config = Config::from_env()?.with_overrides(port, database)?;
            run_server(config).await?;
            Ok(())
        }
        Commands::Items {
            api_url: url_flag,
            command,
        } => {
            let client = ChecklistClient::new(api_url(url_flag));
            cli::items::handle_items_command(&client, command).await
        }
    }
}
