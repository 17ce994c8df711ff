use clap::Args;
use tradeverify_app::domain::inquiries::samples::seed_sample_inquiries;

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let context = super::connect(&args.database_url).await?;

    let inserted = seed_sample_inquiries(context.store.as_ref())
        .await
        .map_err(|error| format!("failed to seed sample inquiries: {error}"))?;

    if inserted == 0 {
        println!("database already holds inquiries; nothing seeded");
    } else {
        println!("seeded {inserted} sample inquiries");
    }

    Ok(())
}
