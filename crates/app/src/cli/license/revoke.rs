use clap::Args;
use tailor_app::domain::licenses::{LicensesService, records::LicenseKey};

#[derive(Debug, Args)]
pub(crate) struct RevokeLicenseArgs {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://tailor.db")]
    database_url: String,

    /// License key to deactivate
    #[arg(long)]
    key: LicenseKey,
}

pub(crate) async fn run(args: RevokeLicenseArgs) -> Result<(), String> {
    let service = super::open_service(&args.database_url).await?;
    let key = args.key;

    let license = service
        .revoke(&key)
        .await
        .map_err(|error| format!("failed to revoke license: {error}"))?;

    super::print_license(&license);

    Ok(())
}
