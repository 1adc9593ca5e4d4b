use clap::Args;
use tailor_app::domain::licenses::LicensesService;

#[derive(Debug, Args)]
pub(crate) struct ListLicensesArgs {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://tailor.db")]
    database_url: String,
}

pub(crate) async fn run(args: ListLicensesArgs) -> Result<(), String> {
    let service = super::open_service(&args.database_url).await?;

    let licenses = service
        .list()
        .await
        .map_err(|error| format!("failed to list licenses: {error}"))?;

    if licenses.is_empty() {
        println!("no licenses issued");
        return Ok(());
    }

    for license in &licenses {
        super::print_license(license);
        println!();
    }

    Ok(())
}
