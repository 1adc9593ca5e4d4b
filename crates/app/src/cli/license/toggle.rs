use clap::Args;
use tailor_app::domain::licenses::{LicensesService, records::LicenseKey};

#[derive(Debug, Args)]
pub(crate) struct ToggleLicenseArgs {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://tailor.db")]
    database_url: String,

    /// License key to flip between active and inactive
    #[arg(long)]
    key: LicenseKey,
}

pub(crate) async fn run(args: ToggleLicenseArgs) -> Result<(), String> {
    let service = super::open_service(&args.database_url).await?;
    let key = args.key;

    let license = service
        .toggle(&key)
        .await
        .map_err(|error| format!("failed to toggle license: {error}"))?;

    super::print_license(&license);

    Ok(())
}
