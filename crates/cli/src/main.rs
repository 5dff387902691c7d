use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use connectors::{file::csv::table::CsvTable, sql::mysql::MySqlDestination};
use engine::{pipeline, service::ImportService};
use model::{mapping::MappingRegistry, result::ImportResult};
use std::sync::Arc;
use tracing::{Level, info};

mod commands;
mod error;

#[derive(Parser)]
#[command(
    name = "csvload",
    version = "0.1.0",
    about = "Mapping-driven delimited file importer for MySQL"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Import {
            file,
            table,
            mapping,
            db_url,
        } => {
            let registry = load_registry(&mapping)?;
            let destination = MySqlDestination::connect(&db_url).await?;
            let service = ImportService::new(registry, Arc::new(destination));

            info!(file = %file, table = %table, "starting import");
            let result = service.import(&file, &table).await?;
            print_result(&result)?;

            if !result.is_success() {
                std::process::exit(1);
            }
        }
        Commands::DryRun {
            file,
            table,
            mapping,
            insert_only,
        } => {
            let registry = load_registry(&mapping)?;
            let table_mapping = registry.get(&table)?;
            let csv = CsvTable::load(&file)?;

            let sql = pipeline::plan_import(table_mapping, &csv, !insert_only)?;
            println!("{sql}");
        }
    }

    Ok(())
}

fn load_registry(path: &str) -> Result<MappingRegistry, CliError> {
    let raw = std::fs::read_to_string(path)?;
    let registry = MappingRegistry::from_json(&raw)?;
    Ok(registry)
}

fn print_result(result: &ImportResult) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(result).map_err(CliError::JsonSerialize)?;
    println!("{json}");
    Ok(())
}
