use clap::Args;
use tailor_app::domain::licenses::{LicensesService, records::LicenseKey};

#[derive(Debug, Args)]
pub(crate) struct DeleteLicenseArgs {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://tailor.db")]
    database_url: String,

    /// License key to remove permanently
    #[arg(long)]
    key: LicenseKey,
}

pub(crate) async fn run(args: DeleteLicenseArgs) -> Result<(), String> {
    let service = super::open_service(&args.database_url).await?;
    let key = args.key;

    service
        .delete(&key)
        .await
        .map_err(|error| format!("failed to delete license: {error}"))?;

    println!("deleted license {key}");

    Ok(())
}
