use clap::{Args, Subcommand};
use tailor_app::{
    database::{self, Db},
    domain::licenses::{SqliteLicensesService, records::LicenseRecord},
};

mod delete;
mod issue;
mod list;
mod revoke;
mod toggle;

#[derive(Debug, Args)]
pub(crate) struct LicenseCommand {
    #[command(subcommand)]
    command: LicenseSubcommand,
}

#[derive(Debug, Subcommand)]
enum LicenseSubcommand {
    Issue(issue::IssueLicenseArgs),
    List(list::ListLicensesArgs),
    Toggle(toggle::ToggleLicenseArgs),
    Revoke(revoke::RevokeLicenseArgs),
    Delete(delete::DeleteLicenseArgs),
}

pub(crate) async fn run(command: LicenseCommand) -> Result<(), String> {
    match command.command {
        LicenseSubcommand::Issue(args) => issue::run(args).await,
        LicenseSubcommand::List(args) => list::run(args).await,
        LicenseSubcommand::Toggle(args) => toggle::run(args).await,
        LicenseSubcommand::Revoke(args) => revoke::run(args).await,
        LicenseSubcommand::Delete(args) => delete::run(args).await,
    }
}

/// Open the store, applying any pending migrations first.
async fn open_service(database_url: &str) -> Result<SqliteLicensesService, String> {
    let pool = database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    Ok(SqliteLicensesService::new(Db::new(pool)))
}

fn print_license(license: &LicenseRecord) {
    println!("license: {}", license.key);
    println!("owner_name: {}", license.owner_name);
    println!("status: {}", license.status);
    println!("issued_at: {}", license.issued_at);
    println!(
        "last_login_at: {}",
        license
            .last_login_at
            .map_or_else(|| "never".to_string(), |value| value.to_string())
    );
    println!(
        "last_login_ip: {}",
        license.last_login_ip.as_deref().unwrap_or("none")
    );
}
