//! # Inventory Service
//!
//! The service handle the transaction processors and reports hang off.
//! Construction is cheap; it clones the database handle and carries the
//! oversell policy.
//!
//! ## Read-Side Leniency
//! `stock_for` and `value_for` treat an unknown product code as empty stock,
//! not an error - a missing product yields the zero tuple. Writes
//! (`record_sale`, `record_entry`) are strict: an unknown code fails with
//! `EngineError::ProductNotFound` and performs no mutation.

use tracing::debug;

use bodega_core::{ConfigSnapshot, Product, StockLevel, StockValue, UnitKind};
use bodega_db::Database;

use crate::error::EngineResult;

// =============================================================================
// Oversell Policy
// =============================================================================

/// Whether a sale may exceed reconciled stock.
///
/// The ledger itself never enforces a floor; this policy is checked by
/// `record_sale` only. `Allow` preserves the long-standing behavior where
/// the counter keeps selling and stock goes negative until the next intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OversellPolicy {
    /// Sales may drive stock negative (default).
    #[default]
    Allow,
    /// Sales exceeding the sold tier's reconciled stock are rejected.
    Reject,
}

// =============================================================================
// Inventory Service
// =============================================================================

/// Orchestrates catalog lookups, configuration reads, pure computations and
/// ledger appends.
///
/// ## Usage
/// ```rust,ignore
/// let service = InventoryService::new(db);
///
/// let movement = service.record_sale(request).await?;
/// let stock = service.stock_for("H001").await?;
/// let report = service.inventory_report().await?;
/// ```
#[derive(Debug, Clone)]
pub struct InventoryService {
    db: Database,
    oversell: OversellPolicy,
}

impl InventoryService {
    /// Creates a service with the default (allow-oversell) policy.
    pub fn new(db: Database) -> Self {
        InventoryService {
            db,
            oversell: OversellPolicy::Allow,
        }
    }

    /// Creates a service with an explicit oversell policy.
    pub fn with_policy(db: Database, oversell: OversellPolicy) -> Self {
        InventoryService { db, oversell }
    }

    /// Returns the configured oversell policy.
    pub fn oversell_policy(&self) -> OversellPolicy {
        self.oversell
    }

    /// Returns the underlying database handle.
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Reads the current configuration snapshot (created with defaults on
    /// first touch). The snapshot is passed explicitly into every
    /// computation; nothing holds it beyond one operation.
    pub async fn current_config(&self) -> EngineResult<ConfigSnapshot> {
        Ok(self.db.config().current().await?)
    }

    // =========================================================================
    // Stock Reconciliation
    // =========================================================================

    /// Reconciles current stock for a product code.
    ///
    /// Unknown codes reconcile to zero stock rather than failing.
    pub async fn stock_for(&self, code: &str) -> EngineResult<StockLevel> {
        match self.db.products().get_by_code(code).await? {
            Some(product) => self.reconcile(&product).await,
            None => {
                debug!(code = %code, "Unknown product reconciles to zero stock");
                Ok(StockLevel::zero())
            }
        }
    }

    /// Reconciles current stock for a resolved product: four filtered ledger
    /// sums folded through the conversion factor. Read-only, exact.
    pub(crate) async fn reconcile(&self, product: &Product) -> EngineResult<StockLevel> {
        let movements = self.db.movements();

        let entries_wholesale = movements
            .sum_entry_quantity(&product.id, UnitKind::Wholesale)
            .await?;
        let entries_retail = movements
            .sum_entry_quantity(&product.id, UnitKind::Retail)
            .await?;
        let sales_wholesale = movements
            .sum_sale_quantity(&product.id, UnitKind::Wholesale)
            .await?;
        let sales_retail = movements
            .sum_sale_quantity(&product.id, UnitKind::Retail)
            .await?;

        Ok(StockLevel::reconcile(
            entries_wholesale,
            entries_retail,
            sales_wholesale,
            sales_retail,
            product.units_per_pack,
        ))
    }

    // =========================================================================
    // Valuation
    // =========================================================================

    /// Values current stock for a product code at the current exchange rate.
    ///
    /// A present-tense report: re-running after a rate change yields a
    /// different Bs figure, while recorded sales keep their frozen totals.
    /// Unknown codes value to zero.
    pub async fn value_for(&self, code: &str) -> EngineResult<StockValue> {
        let product = match self.db.products().get_by_code(code).await? {
            Some(product) => product,
            None => return Ok(StockValue::zero()),
        };

        let stock = self.reconcile(&product).await?;
        let config = self.current_config().await?;

        Ok(StockValue::valuate(
            &stock,
            &product,
            config.exchange_rate(),
        ))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
