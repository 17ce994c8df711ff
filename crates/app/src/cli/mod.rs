use clap::{Parser, Subcommand};

mod db;
mod inquiries;

#[derive(Debug, Parser)]
#[command(
    name = "tradeverify-app",
    about = "Trade inquiry verification admin CLI",
    long_about = None
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Inquiries(inquiries::InquiriesCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Inquiries(command) => inquiries::run(command).await,
        }
    }
}
