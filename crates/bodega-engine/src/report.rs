//! # Reporting
//!
//! Aggregates the per-product reconcile/valuate pass into the plain
//! structured records dashboard and export consumers read. The export
//! format itself (spreadsheet, PDF, HTML) is someone else's job; these
//! types serialize cleanly and that is where this crate stops.
//!
//! Stock valuation is a present-tense report: it always uses the *current*
//! exchange rate, so the same ledger values differently after a rate
//! update. Recorded sales keep the totals they froze at creation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use bodega_core::{Money, StockLevel, StockValue};

use crate::error::EngineResult;
use crate::service::InventoryService;

// =============================================================================
// Report Types
// =============================================================================

/// One product's row in the inventory report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryLine {
    /// Business code.
    pub code: String,

    /// Display name.
    pub name: String,

    /// Category label, if any.
    pub category: Option<String>,

    /// Reconciled stock in both unit systems.
    pub stock: StockLevel,

    /// Stock value in both currencies at the current rate.
    pub value: StockValue,
}

/// The full inventory report: per-product lines plus catalog-wide totals.
///
/// Products with no positive stock in either unit are left out of `lines`;
/// their movements stay in the ledger untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryReport {
    pub lines: Vec<InventoryLine>,

    /// Sum of line values in USD cents.
    pub total_usd_cents: i64,

    /// Sum of line values in Bs cents (each line rounded at its own
    /// boundary, then summed).
    pub total_b_cents: i64,
}

impl InventoryReport {
    /// Serializes the report for export consumers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Sales aggregate for one business date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySalesSummary {
    pub date: NaiveDate,

    /// Number of sales recorded on the date.
    pub count: i64,

    /// Sum of with-tax totals (USD cents).
    pub total_usd_cents: i64,

    /// Sum of frozen Bs totals (Bs cents).
    pub total_b_cents: i64,
}

/// Lifetime stock intake value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntriesTotal {
    /// Sum of all entry totals (USD cents, exact).
    pub usd_cents: i64,

    /// The USD sum converted at the *current* exchange rate - this figure
    /// drifts with the rate, unlike sale records.
    pub b_cents: i64,
}

// =============================================================================
// Report Operations
// =============================================================================

impl InventoryService {
    /// Builds the inventory report across the whole catalog.
    ///
    /// Reads the configuration snapshot once and applies it to every line,
    /// so a mid-report rate change cannot split the report across rates.
    pub async fn inventory_report(&self) -> EngineResult<InventoryReport> {
        let config = self.current_config().await?;
        let rate = config.exchange_rate();
        let products = self.db().products().list().await?;

        let mut lines = Vec::new();
        let mut total_usd = Money::zero();
        let mut total_b = Money::zero();

        for product in &products {
            let stock = self.reconcile(product).await?;
            if stock.is_depleted() {
                continue;
            }

            let value = StockValue::valuate(&stock, product, rate);
            total_usd += value.usd();
            total_b += value.b();

            lines.push(InventoryLine {
                code: product.code.clone(),
                name: product.name.clone(),
                category: product.category.clone(),
                stock,
                value,
            });
        }

        debug!(
            products = products.len(),
            listed = lines.len(),
            total_usd_cents = total_usd.cents(),
            "Inventory report built"
        );

        Ok(InventoryReport {
            lines,
            total_usd_cents: total_usd.cents(),
            total_b_cents: total_b.cents(),
        })
    }

    /// Aggregates the sales recorded on one business date.
    pub async fn daily_sales_summary(&self, date: NaiveDate) -> EngineResult<DailySalesSummary> {
        let row = self.db().movements().daily_sales(date).await?;

        Ok(DailySalesSummary {
            date,
            count: row.count,
            total_usd_cents: row.total_cents,
            total_b_cents: row.total_b_cents,
        })
    }

    /// Sums all entry totals, with the Bs figure converted at the current
    /// rate.
    pub async fn entries_total(&self) -> EngineResult<EntriesTotal> {
        let usd = Money::from_cents(self.db().movements().sum_entry_totals().await?);
        let config = self.current_config().await?;

        Ok(EntriesTotal {
            usd_cents: usd.cents(),
            b_cents: usd.to_b(config.exchange_rate()).cents(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
