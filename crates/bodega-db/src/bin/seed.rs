//! # Seed Data Generator
//!
//! Populates a database with the demo catalog and default configuration.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p bodega-db --bin seed
//!
//! # Specify database path
//! cargo run -p bodega-db --bin seed -- --db ./data/bodega.db
//! ```

use std::env;

use chrono::Utc;
use uuid::Uuid;

use bodega_core::Product;
use bodega_db::{Database, DbConfig};

/// Demo catalog: code, name, description, category, retail price (cents),
/// wholesale price (cents), retail units per wholesale pack.
const DEMO_PRODUCTS: &[(&str, &str, &str, &str, i64, i64, i64)] = &[
    (
        "H001",
        "Eggs",
        "Fresh chicken eggs",
        "Protein",
        15,
        12,
        30,
    ),
    (
        "A001",
        "Rice",
        "Premium white rice",
        "Grains",
        250,
        200,
        25,
    ),
    (
        "AC001",
        "Cooking Oil",
        "Vegetable cooking oil",
        "Oils",
        300,
        240,
        12,
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./bodega_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Bodega Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./bodega_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Bodega Seed Data Generator");
    println!("==========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Reading the config row creates it with defaults on first touch
    let config = db.config().current().await?;
    println!(
        "✓ Configuration: rate {} / tax {}%",
        config.exchange_rate().rate(),
        config.tax_rate().percentage()
    );

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding demo catalog...");

    let now = Utc::now();
    for (code, name, description, category, retail, wholesale, units) in DEMO_PRODUCTS {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            code: code.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            category: Some(category.to_string()),
            retail_price_cents: *retail,
            wholesale_price_cents: *wholesale,
            units_per_pack: *units,
            created_at: now,
        };
        db.products().insert(&product).await?;
        println!("  {} {} (pack of {})", code, name, units);
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
