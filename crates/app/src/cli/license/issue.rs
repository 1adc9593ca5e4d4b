use clap::Args;
use tailor_app::domain::licenses::{LicensesService, data::NewLicense, records::LicenseKey};

#[derive(Debug, Args)]
pub(crate) struct IssueLicenseArgs {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://tailor.db")]
    database_url: String,

    /// License key; generated when omitted. Reissuing an existing key
    /// reactivates it and clears its login history.
    #[arg(long)]
    key: Option<String>,

    /// Shop owner display name
    #[arg(long)]
    owner: String,
}

pub(crate) async fn run(args: IssueLicenseArgs) -> Result<(), String> {
    let key = match args.key {
        Some(raw) => LicenseKey::new(raw).map_err(|error| format!("invalid key: {error}"))?,
        None => LicenseKey::generate(),
    };

    let owner_name = args.owner.trim().to_string();

    if owner_name.is_empty() {
        return Err("owner cannot be empty".to_string());
    }

    let service = super::open_service(&args.database_url).await?;

    let license = service
        .issue(NewLicense { key, owner_name })
        .await
        .map_err(|error| format!("failed to issue license: {error}"))?;

    super::print_license(&license);

    Ok(())
}
