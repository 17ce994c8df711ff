use clap::{Args, Subcommand};
use tradeverify_app::context::AppContext;

mod seed;
mod stats;

#[derive(Debug, Args)]
pub(crate) struct InquiriesCommand {
    #[command(subcommand)]
    command: InquiriesSubcommand,
}

#[derive(Debug, Subcommand)]
enum InquiriesSubcommand {
    /// Insert the sample inquiries into an empty database
    Seed(seed::SeedArgs),

    /// Print inquiry counts per status
    Stats(stats::StatsArgs),
}

pub(crate) async fn run(command: InquiriesCommand) -> Result<(), String> {
    match command.command {
        InquiriesSubcommand::Seed(args) => seed::run(args).await,
        InquiriesSubcommand::Stats(args) => stats::run(args).await,
    }
}

async fn connect(database_url: &str) -> Result<AppContext, String> {
    AppContext::from_database_url(database_url, false)
        .await
        .map_err(|error| format!("{error}: {}", source_message(&error)))
}

fn source_message(error: &dyn std::error::Error) -> String {
    error
        .source()
        .map_or_else(String::new, ToString::to_string)
}
