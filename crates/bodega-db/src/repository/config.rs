//! # Configuration Repository
//!
//! The singleton configuration row: exchange rate, tax rate, reference
//! dates, store name.
//!
//! ## Read-Or-Create
//! The row is created lazily with defaults on first read, so a fresh
//! database is usable without a setup step. Every sale and every stock
//! valuation reads the row at operation time; updates take effect for all
//! subsequent operations immediately (sales keep the values they captured).

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;
use bodega_core::ConfigSnapshot;

/// Default exchange rate: 35.5000 Bs per USD.
pub const DEFAULT_EXCHANGE_RATE_SCALED: i64 = 355_000;

/// Default tax rate: 30.00%.
pub const DEFAULT_TAX_RATE_BPS: u32 = 3000;

/// Default company display name.
pub const DEFAULT_STORE_NAME: &str = "Bodega Market";

/// Repository for the configuration row.
#[derive(Debug, Clone)]
pub struct ConfigRepository {
    pool: SqlitePool,
}

impl ConfigRepository {
    /// Creates a new ConfigRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ConfigRepository { pool }
    }

    /// Reads the current configuration snapshot, creating the default row
    /// if none exists yet.
    pub async fn current(&self) -> DbResult<ConfigSnapshot> {
        if let Some(config) = self.fetch().await? {
            return Ok(config);
        }

        debug!("No configuration row, inserting defaults");

        let today = Utc::now().date_naive();
        let defaults = ConfigSnapshot {
            exchange_rate_scaled: DEFAULT_EXCHANGE_RATE_SCALED,
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            rate_date: today,
            program_date: today,
            store_name: DEFAULT_STORE_NAME.to_string(),
        };

        // Another writer may have raced the insert; ignore the conflict and
        // read whatever row won.
        sqlx::query(
            r#"
            INSERT INTO config (
                id, exchange_rate_scaled, tax_rate_bps,
                rate_date, program_date, store_name
            ) VALUES (1, ?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO NOTHING
            "#,
        )
        .bind(defaults.exchange_rate_scaled)
        .bind(defaults.tax_rate_bps)
        .bind(defaults.rate_date)
        .bind(defaults.program_date)
        .bind(&defaults.store_name)
        .execute(&self.pool)
        .await?;

        match self.fetch().await? {
            Some(config) => Ok(config),
            None => Ok(defaults),
        }
    }

    /// Overwrites the configuration row.
    ///
    /// Takes effect for every subsequent valuation and sale; already
    /// recorded sales are untouched (their totals are frozen columns).
    pub async fn update(&self, config: &ConfigSnapshot) -> DbResult<()> {
        info!(
            exchange_rate_scaled = config.exchange_rate_scaled,
            tax_rate_bps = config.tax_rate_bps,
            "Updating configuration"
        );

        sqlx::query(
            r#"
            INSERT INTO config (
                id, exchange_rate_scaled, tax_rate_bps,
                rate_date, program_date, store_name
            ) VALUES (1, ?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                exchange_rate_scaled = excluded.exchange_rate_scaled,
                tax_rate_bps = excluded.tax_rate_bps,
                rate_date = excluded.rate_date,
                program_date = excluded.program_date,
                store_name = excluded.store_name
            "#,
        )
        .bind(config.exchange_rate_scaled)
        .bind(config.tax_rate_bps)
        .bind(config.rate_date)
        .bind(config.program_date)
        .bind(&config.store_name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn fetch(&self) -> DbResult<Option<ConfigSnapshot>> {
        let config = sqlx::query_as::<_, ConfigSnapshot>(
            r#"
            SELECT
                exchange_rate_scaled, tax_rate_bps,
                rate_date, program_date, store_name
            FROM config
            WHERE id = 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(config)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_current_creates_defaults() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.config();

        let config = repo.current().await.unwrap();
        assert_eq!(config.exchange_rate_scaled, DEFAULT_EXCHANGE_RATE_SCALED);
        assert_eq!(config.tax_rate_bps, DEFAULT_TAX_RATE_BPS);
        assert_eq!(config.store_name, DEFAULT_STORE_NAME);

        // Second read returns the persisted row, not a fresh default
        let again = repo.current().await.unwrap();
        assert_eq!(again.exchange_rate_scaled, config.exchange_rate_scaled);
    }

    #[tokio::test]
    async fn test_update_round_trips() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.config();

        let mut config = repo.current().await.unwrap();
        config.exchange_rate_scaled = 400_000; // 40.0000
        config.tax_rate_bps = 1600; // 16.00%
        config.store_name = "Corner Store".to_string();

        repo.update(&config).await.unwrap();

        let read = repo.current().await.unwrap();
        assert_eq!(read.exchange_rate_scaled, 400_000);
        assert_eq!(read.tax_rate_bps, 1600);
        assert_eq!(read.store_name, "Corner Store");
    }
}
