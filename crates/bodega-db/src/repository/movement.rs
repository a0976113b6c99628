//! # Movement Repository
//!
//! The append-only movement ledger: inventory entries in, sales out.
//!
//! ## Ledger Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  APPEND-ONLY                                                        │
//! │                                                                     │
//! │  • Movements are inserted whole in a single statement - SQLite      │
//! │    makes that atomic; there is no partial record to roll back       │
//! │  • No UPDATE or DELETE exists in this module                        │
//! │  • Stock is never stored: it is derived by the filtered sums below  │
//! │    (counter/ledger divergence is impossible when there is no        │
//! │    counter)                                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use bodega_core::{EntryMovement, SaleMovement, UnitKind};

/// A day's sales aggregate for dashboard summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct DailySalesRow {
    /// Number of sales recorded on the day.
    pub count: i64,
    /// Sum of with-tax totals (USD cents).
    pub total_cents: i64,
    /// Sum of Bs totals as frozen at each sale (Bs cents).
    pub total_b_cents: i64,
}

/// Repository for ledger database operations.
#[derive(Debug, Clone)]
pub struct MovementRepository {
    pool: SqlitePool,
}

impl MovementRepository {
    /// Creates a new MovementRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MovementRepository { pool }
    }

    // =========================================================================
    // Appends
    // =========================================================================

    /// Appends an entry movement. Atomic: the full record persists or none
    /// of it does.
    pub async fn append_entry(&self, entry: &EntryMovement) -> DbResult<()> {
        debug!(
            product_id = %entry.product_id,
            unit = ?entry.unit,
            quantity = %entry.quantity,
            "Appending entry movement"
        );

        sqlx::query(
            r#"
            INSERT INTO entries (
                id, entry_date, product_id, unit,
                quantity, unit_price_cents, total_cents, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&entry.id)
        .bind(entry.entry_date)
        .bind(&entry.product_id)
        .bind(entry.unit)
        .bind(entry.quantity)
        .bind(entry.unit_price_cents)
        .bind(entry.total_cents)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Appends a sale movement. Same atomicity as [`Self::append_entry`].
    pub async fn append_sale(&self, sale: &SaleMovement) -> DbResult<()> {
        debug!(
            product_id = %sale.product_id,
            unit = ?sale.unit,
            total_cents = %sale.total_cents,
            "Appending sale movement"
        );

        sqlx::query(
            r#"
            INSERT INTO sales (
                id, sale_date, product_id, unit,
                qty_wholesale, qty_retail, unit_price_cents,
                subtotal_cents, tax_cents, total_cents, total_b_cents,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
        )
        .bind(&sale.id)
        .bind(sale.sale_date)
        .bind(&sale.product_id)
        .bind(sale.unit)
        .bind(sale.qty_wholesale)
        .bind(sale.qty_retail)
        .bind(sale.unit_price_cents)
        .bind(sale.subtotal_cents)
        .bind(sale.tax_cents)
        .bind(sale.total_cents)
        .bind(sale.total_b_cents)
        .bind(sale.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // =========================================================================
    // Reconciliation Sums
    // =========================================================================

    /// Sums entered quantity for a product at one tier. 0 if none.
    pub async fn sum_entry_quantity(&self, product_id: &str, unit: UnitKind) -> DbResult<i64> {
        let sum: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(quantity), 0)
            FROM entries
            WHERE product_id = ?1 AND unit = ?2
            "#,
        )
        .bind(product_id)
        .bind(unit)
        .fetch_one(&self.pool)
        .await?;

        Ok(sum)
    }

    /// Sums sold quantity for a product at one tier. 0 if none.
    ///
    /// Sales partition quantity into a tier-specific column, so the summed
    /// column follows the tier being asked for.
    pub async fn sum_sale_quantity(&self, product_id: &str, unit: UnitKind) -> DbResult<i64> {
        let sql = match unit {
            UnitKind::Wholesale => {
                r#"
                SELECT COALESCE(SUM(qty_wholesale), 0)
                FROM sales
                WHERE product_id = ?1 AND unit = ?2
                "#
            }
            UnitKind::Retail => {
                r#"
                SELECT COALESCE(SUM(qty_retail), 0)
                FROM sales
                WHERE product_id = ?1 AND unit = ?2
                "#
            }
        };

        let sum: i64 = sqlx::query_scalar(sql)
            .bind(product_id)
            .bind(unit)
            .fetch_one(&self.pool)
            .await?;

        Ok(sum)
    }

    // =========================================================================
    // Listings & Lookups
    // =========================================================================

    /// Gets a sale by ID.
    pub async fn get_sale(&self, id: &str) -> DbResult<Option<SaleMovement>> {
        let sale = sqlx::query_as::<_, SaleMovement>(
            r#"
            SELECT
                id, sale_date, product_id, unit,
                qty_wholesale, qty_retail, unit_price_cents,
                subtotal_cents, tax_cents, total_cents, total_b_cents,
                created_at
            FROM sales
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    /// Lists entries newest-first (business date, then creation time).
    pub async fn list_entries(&self, limit: u32) -> DbResult<Vec<EntryMovement>> {
        let entries = sqlx::query_as::<_, EntryMovement>(
            r#"
            SELECT
                id, entry_date, product_id, unit,
                quantity, unit_price_cents, total_cents, created_at
            FROM entries
            ORDER BY entry_date DESC, created_at DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Lists sales newest-first.
    pub async fn list_sales(&self, limit: u32) -> DbResult<Vec<SaleMovement>> {
        let sales = sqlx::query_as::<_, SaleMovement>(
            r#"
            SELECT
                id, sale_date, product_id, unit,
                qty_wholesale, qty_retail, unit_price_cents,
                subtotal_cents, tax_cents, total_cents, total_b_cents,
                created_at
            FROM sales
            ORDER BY sale_date DESC, created_at DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    // =========================================================================
    // Aggregates
    // =========================================================================

    /// Counts all entry movements.
    pub async fn count_entries(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM entries")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Counts all sale movements.
    pub async fn count_sales(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Aggregates the sales recorded on one business date.
    pub async fn daily_sales(&self, date: NaiveDate) -> DbResult<DailySalesRow> {
        let row = sqlx::query_as::<_, DailySalesRow>(
            r#"
            SELECT
                COUNT(*) AS count,
                COALESCE(SUM(total_cents), 0) AS total_cents,
                COALESCE(SUM(total_b_cents), 0) AS total_b_cents
            FROM sales
            WHERE sale_date = ?1
            "#,
        )
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Sums all entry totals in USD cents (lifetime stock intake value).
    pub async fn sum_entry_totals(&self) -> DbResult<i64> {
        let sum: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(total_cents), 0) FROM entries")
            .fetch_one(&self.pool)
            .await?;

        Ok(sum)
    }
}

/// Generates a new movement ID.
pub fn generate_movement_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use crate::repository::product::generate_product_id;
    use bodega_core::Product;
    use chrono::Utc;

    async fn db_with_product() -> (Database, Product) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let product = Product {
            id: generate_product_id(),
            code: "H001".to_string(),
            name: "Eggs".to_string(),
            description: None,
            category: Some("Protein".to_string()),
            retail_price_cents: 15,
            wholesale_price_cents: 12,
            units_per_pack: 30,
            created_at: Utc::now(),
        };
        db.products().insert(&product).await.unwrap();

        (db, product)
    }

    fn entry(product_id: &str, unit: UnitKind, quantity: i64, price: i64) -> EntryMovement {
        EntryMovement {
            id: generate_movement_id(),
            entry_date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            product_id: product_id.to_string(),
            unit,
            quantity,
            unit_price_cents: price,
            total_cents: quantity * price,
            created_at: Utc::now(),
        }
    }

    fn sale(product_id: &str, unit: UnitKind, quantity: i64) -> SaleMovement {
        let (qty_wholesale, qty_retail) = match unit {
            UnitKind::Wholesale => (quantity, 0),
            UnitKind::Retail => (0, quantity),
        };
        SaleMovement {
            id: generate_movement_id(),
            sale_date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            product_id: product_id.to_string(),
            unit,
            qty_wholesale,
            qty_retail,
            unit_price_cents: 15,
            subtotal_cents: quantity * 15,
            tax_cents: 0,
            total_cents: quantity * 15,
            total_b_cents: quantity * 15 * 35,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_append_and_sum_entries() {
        let (db, product) = db_with_product().await;
        let repo = db.movements();

        repo.append_entry(&entry(&product.id, UnitKind::Wholesale, 10, 12))
            .await
            .unwrap();
        repo.append_entry(&entry(&product.id, UnitKind::Wholesale, 5, 12))
            .await
            .unwrap();
        repo.append_entry(&entry(&product.id, UnitKind::Retail, 7, 15))
            .await
            .unwrap();

        let wholesale = repo
            .sum_entry_quantity(&product.id, UnitKind::Wholesale)
            .await
            .unwrap();
        let retail = repo
            .sum_entry_quantity(&product.id, UnitKind::Retail)
            .await
            .unwrap();

        assert_eq!(wholesale, 15);
        assert_eq!(retail, 7);
        assert_eq!(repo.count_entries().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_sum_sale_quantity_follows_tier_column() {
        let (db, product) = db_with_product().await;
        let repo = db.movements();

        repo.append_sale(&sale(&product.id, UnitKind::Wholesale, 3))
            .await
            .unwrap();
        repo.append_sale(&sale(&product.id, UnitKind::Retail, 5))
            .await
            .unwrap();

        assert_eq!(
            repo.sum_sale_quantity(&product.id, UnitKind::Wholesale)
                .await
                .unwrap(),
            3
        );
        assert_eq!(
            repo.sum_sale_quantity(&product.id, UnitKind::Retail)
                .await
                .unwrap(),
            5
        );
    }

    #[tokio::test]
    async fn test_sums_are_zero_for_unknown_product() {
        let (db, _product) = db_with_product().await;
        let repo = db.movements();

        assert_eq!(
            repo.sum_entry_quantity("no-such-id", UnitKind::Wholesale)
                .await
                .unwrap(),
            0
        );
        assert_eq!(
            repo.sum_sale_quantity("no-such-id", UnitKind::Retail)
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_partition_check_rejects_double_quantity() {
        let (db, product) = db_with_product().await;
        let repo = db.movements();

        let mut bad = sale(&product.id, UnitKind::Wholesale, 3);
        bad.qty_retail = 2; // both tiers nonzero

        let err = repo.append_sale(&bad).await.unwrap_err();
        assert!(matches!(err, DbError::CheckViolation { .. }));
        assert_eq!(repo.count_sales().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_movement_requires_known_product() {
        let (db, _product) = db_with_product().await;
        let repo = db.movements();

        let err = repo
            .append_entry(&entry("ghost-id", UnitKind::Retail, 1, 10))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_daily_sales_aggregate() {
        let (db, product) = db_with_product().await;
        let repo = db.movements();

        repo.append_sale(&sale(&product.id, UnitKind::Retail, 5))
            .await
            .unwrap();
        repo.append_sale(&sale(&product.id, UnitKind::Retail, 2))
            .await
            .unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let row = repo.daily_sales(date).await.unwrap();
        assert_eq!(row.count, 2);
        assert_eq!(row.total_cents, 7 * 15);
        assert_eq!(row.total_b_cents, 7 * 15 * 35);

        let empty = repo
            .daily_sales(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
            .await
            .unwrap();
        assert_eq!(empty.count, 0);
        assert_eq!(empty.total_cents, 0);
    }

    #[tokio::test]
    async fn test_listings_newest_first() {
        let (db, product) = db_with_product().await;
        let repo = db.movements();

        let mut older = entry(&product.id, UnitKind::Retail, 1, 15);
        older.entry_date = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let newer = entry(&product.id, UnitKind::Retail, 2, 15);

        repo.append_entry(&older).await.unwrap();
        repo.append_entry(&newer).await.unwrap();

        let listed = repo.list_entries(10).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].quantity, 2);
        assert_eq!(listed[1].quantity, 1);

        assert_eq!(repo.sum_entry_totals().await.unwrap(), 3 * 15);
    }
}
