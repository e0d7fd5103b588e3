use std::path::PathBuf;

use clap::Parser;
use diesel::{Connection, SqliteConnection};
use quake_api::config::database_url;
use quake_api::orm::run_pending_migrations;
use quake_api::seed::{historical_earthquakes, load_seed_file, seed_earthquakes};

#[derive(Parser)]
#[command(name = "quake-seed")]
#[command(about = "Populate the earthquake database")]
#[command(version)]
struct Cli {
    /// SQLite database to seed (defaults to DATABASE_URL, then app.db)
    #[arg(short, long)]
    database_url: Option<String>,

    /// JSON array of earthquakes to insert instead of the built-in set
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Append to existing rows instead of replacing them
    #[arg(short, long)]
    keep: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let url = cli.database_url.unwrap_or_else(database_url);
    println!("Seeding database: {}", url);

    let mut conn = SqliteConnection::establish(&url)?;
    for version in run_pending_migrations(&mut conn).map_err(|e| e.to_string())? {
        println!("Applied migration {}", version);
    }

    let records = match &cli.file {
        Some(path) => load_seed_file(path)?,
        None => historical_earthquakes(),
    };

    let summary = seed_earthquakes(&mut conn, &records, cli.keep)?;
    if summary.removed > 0 {
        println!("Removed {} existing earthquakes", summary.removed);
    }
    println!("Inserted {} earthquakes", summary.inserted);

    Ok(())
}
