use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct StatsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Print the statistics as JSON
    #[arg(long)]
    json: bool,
}

pub(crate) async fn run(args: StatsArgs) -> Result<(), String> {
    let context = super::connect(&args.database_url).await?;

    let stats = context
        .inquiries
        .get_statistics()
        .await
        .map_err(|error| format!("failed to load statistics: {error}"))?;

    if args.json {
        let json = serde_json::to_string_pretty(&stats)
            .map_err(|error| format!("failed to encode statistics: {error}"))?;

        println!("{json}");
    } else {
        println!("total:    {}", stats.total);
        println!("pending:  {}", stats.pending);
        println!("verified: {}", stats.verified);
        println!("rejected: {}", stats.rejected);
    }

    Ok(())
}
