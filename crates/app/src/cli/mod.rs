use clap::{Parser, Subcommand};

mod db;
mod license;

#[derive(Debug, Parser)]
#[command(name = "tailor-app", about = "Tailor shop administration CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    License(license::LicenseCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::License(command) => license::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
