pub mod export;
pub mod init;
pub mod migrations;
pub mod show;
pub mod sync;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Fetch tags, tasks, and history from the remote service")]
    Sync,
    #[command(about = "Display stored tasks, tags, and per-task history")]
    Show(show::ShowArgs),
    #[command(about = "Export stored data to CSV, JSON, or Excel")]
    Export(export::ExportArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database schema migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Sync => sync::cmd().await,
            Commands::Show(args) => show::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
