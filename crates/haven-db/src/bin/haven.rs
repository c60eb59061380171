//! # haven: Store Maintenance Tool
//!
//! Seeds the store and prints the numbers the dashboards show.
//!
//! ## Usage
//! ```bash
//! # Seed the six demo products (only if the store is empty)
//! cargo run -p haven-db --bin haven -- seed
//!
//! # Seed the 27-line stationery range instead
//! cargo run -p haven-db --bin haven -- seed --catalog stationery
//!
//! # Dashboard metric cards as JSON
//! cargo run -p haven-db --bin haven -- summary
//!
//! # Analytics page as JSON, against a specific store
//! cargo run -p haven-db --bin haven -- --db ./data/haven.db report
//! ```
//!
//! Without `--db` the store path comes from `HAVEN_DB_PATH`, then
//! `./stationery_haven.db`.

use std::env;

use haven_core::{AnalyticsReport, DashboardSummary};
use haven_db::{Catalog, Database, DbConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Seed(Catalog),
    Summary,
    Report,
    Help,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let (db_path, command) = parse_args(&args)?;

    if command == Command::Help {
        print_help();
        return Ok(());
    }

    let config = match db_path {
        Some(path) => DbConfig::new(path),
        None => DbConfig::from_env(),
    };
    let db = Database::new(config).await?;

    match command {
        Command::Seed(catalog) => {
            let report = match catalog {
                Catalog::Demo => db.seed_demo_data().await?,
                Catalog::Stationery => db.seed_stationery_catalog().await?,
            };

            if report.is_empty() {
                let existing = db.products().count().await?;
                println!("Store already has {} products, nothing seeded.", existing);
            } else {
                println!(
                    "Seeded {} products, {} staff, {} customers.",
                    report.products, report.staff, report.customers
                );
            }
        }
        Command::Summary => {
            let products = db.products().list_all().await?;
            let staff = db.staff().list_all().await?;
            let customers = db.customers().list_all().await?;

            let summary = DashboardSummary::from_rows(&products, &staff, &customers);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Report => {
            let products = db.products().list_all().await?;
            let customers = db.customers().list_all().await?;

            let report = AnalyticsReport::from_rows(&products, &customers);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Help => print_help(),
    }

    info!("Done");
    Ok(())
}

/// Log to stderr so JSON on stdout stays clean.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every repository call
/// - Default: INFO, debug for haven crates, warn for sqlx
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,haven_db=debug,haven_core=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_args(args: &[String]) -> Result<(Option<String>, Command), String> {
    let mut db_path = None;
    let mut command = None;
    let mut catalog = Catalog::Demo;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                let value = args.get(i + 1).ok_or("--db needs a path")?;
                db_path = Some(value.clone());
                i += 1;
            }
            "--catalog" | "-c" => {
                let value = args.get(i + 1).ok_or("--catalog needs a value")?;
                catalog = match value.as_str() {
                    "demo" => Catalog::Demo,
                    "stationery" => Catalog::Stationery,
                    other => return Err(format!("unknown catalog '{}'", other)),
                };
                i += 1;
            }
            "--help" | "-h" | "help" => command = Some(Command::Help),
            "seed" => command = command.or(Some(Command::Seed(Catalog::Demo))),
            "summary" => command = command.or(Some(Command::Summary)),
            "report" => command = command.or(Some(Command::Report)),
            other => return Err(format!("unknown argument '{}'", other)),
        }
        i += 1;
    }

    let command = match command.unwrap_or(Command::Help) {
        Command::Seed(_) => Command::Seed(catalog),
        other => other,
    };

    Ok((db_path, command))
}

fn print_help() {
    println!("Stationery Haven store tool");
    println!();
    println!("Usage: haven [OPTIONS] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  seed       Fill an empty store with demo data");
    println!("  summary    Print dashboard metrics as JSON");
    println!("  report     Print analytics as JSON");
    println!();
    println!("Options:");
    println!("  -d, --db <PATH>         Database file (default: $HAVEN_DB_PATH or ./stationery_haven.db)");
    println!("  -c, --catalog <NAME>    Seed catalog: demo | stationery (default: demo)");
    println!("  -h, --help              Show this help message");
}
