//! Shared test fixtures: an in-memory database seeded with the demo catalog.

use chrono::Utc;
use uuid::Uuid;

use bodega_core::Product;
use bodega_db::{Database, DbConfig};

pub const EGGS_CODE: &str = "H001";
pub const RICE_CODE: &str = "A001";
pub const OIL_CODE: &str = "AC001";

/// In-memory database with three catalog products and no movements.
///
/// Prices mirror the demo catalog: eggs 0.15/0.12 pack of 30, rice
/// 2.50/2.00 pack of 25, oil 3.00/2.40 pack of 12. Config is whatever the
/// defaults are (35.50 Bs/USD, 30% tax) once first read.
pub async fn seeded_db() -> Database {
    let db = Database::new(DbConfig::in_memory())
        .await
        .expect("in-memory database");

    let catalog: &[(&str, &str, &str, i64, i64, i64)] = &[
        (EGGS_CODE, "Eggs", "Protein", 15, 12, 30),
        (RICE_CODE, "Rice", "Grains", 250, 200, 25),
        (OIL_CODE, "Cooking Oil", "Oils", 300, 240, 12),
    ];

    for (code, name, category, retail, wholesale, units) in catalog {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            code: code.to_string(),
            name: name.to_string(),
            description: None,
            category: Some(category.to_string()),
            retail_price_cents: *retail,
            wholesale_price_cents: *wholesale,
            units_per_pack: *units,
            created_at: Utc::now(),
        };
        db.products().insert(&product).await.expect("seed product");
    }

    db
}
