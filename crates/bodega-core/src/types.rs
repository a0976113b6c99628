//! # Domain Types
//!
//! Core domain types for the inventory and sales ledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌───────────────┐  ┌────────────────┐  ┌────────────────┐         │
//! │  │   Product     │  │ EntryMovement  │  │  SaleMovement  │         │
//! │  │  ───────────  │  │  ────────────  │  │  ────────────  │         │
//! │  │  id (UUID)    │  │  id (UUID)     │  │  id (UUID)     │         │
//! │  │  code (biz)   │  │  product_id    │  │  product_id    │         │
//! │  │  prices ×2    │  │  unit, qty     │  │  qty ×2 tiers  │         │
//! │  │  units/pack   │  │  captured $    │  │  frozen totals │         │
//! │  └───────────────┘  └────────────────┘  └────────────────┘         │
//! │                                                                     │
//! │  ┌───────────────┐  ┌────────────────┐  ┌────────────────┐         │
//! │  │   TaxRate     │  │  ExchangeRate  │  │    UnitKind    │         │
//! │  │  bps (u32)    │  │  1/10000 (i64) │  │   Wholesale    │         │
//! │  │  3000 = 30%   │  │ 355000 = 35.50 │  │   Retail       │         │
//! │  └───────────────┘  └────────────────┘  └────────────────┘         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every catalog entity has:
//! - `id`: UUID v4 - immutable, used for database relations
//! - `code`: human-readable business key (what the operator types at the
//!   counter), unique per catalog

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01% = 1/10000; 3000 bps = 30.00%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Exchange Rate
// =============================================================================

/// Bs-per-USD exchange rate as a fixed-point integer in ten-thousandths.
///
/// 355_000 = 35.5000 Bs per USD. The same 1/10000 scale the tax rate uses,
/// so both boundary roundings share one formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate(i64);

impl ExchangeRate {
    /// Creates an exchange rate from a ten-thousandths value.
    #[inline]
    pub const fn from_scaled(scaled: i64) -> Self {
        ExchangeRate(scaled)
    }

    /// Creates an exchange rate from a plain decimal (for convenience).
    pub fn from_rate(rate: f64) -> Self {
        ExchangeRate((rate * 10_000.0).round() as i64)
    }

    /// Returns the raw ten-thousandths value.
    #[inline]
    pub const fn scaled(&self) -> i64 {
        self.0
    }

    /// Returns the rate as a decimal (for display only).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }
}

// =============================================================================
// Unit Kind
// =============================================================================

/// Movement classification: which conversion path and price tier applies.
///
/// A product is bought and sold either by the pack (`Wholesale`) or by the
/// single unit (`Retail`); `Product::units_per_pack` relates the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// Bulk tier: one unit of movement = one pack.
    Wholesale,
    /// Single-unit tier.
    Retail,
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product, priced in USD at both tiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Business key - what the operator types at the counter (e.g. "H001").
    pub code: String,

    /// Display name.
    pub name: String,

    /// Optional free-text description.
    pub description: Option<String>,

    /// Category label (e.g. "Grains").
    pub category: Option<String>,

    /// Single-unit price in USD cents.
    pub retail_price_cents: i64,

    /// Per-pack price in USD cents.
    pub wholesale_price_cents: i64,

    /// Conversion factor: retail units per wholesale pack (≥ 1).
    pub units_per_pack: i64,

    /// When the product was created.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Returns the retail price as Money.
    #[inline]
    pub fn retail_price(&self) -> Money {
        Money::from_cents(self.retail_price_cents)
    }

    /// Returns the wholesale price as Money.
    #[inline]
    pub fn wholesale_price(&self) -> Money {
        Money::from_cents(self.wholesale_price_cents)
    }

    /// Returns the catalog price for the given tier.
    ///
    /// Entries capture this price at entry time; sales take the price from
    /// the caller instead (discounts and markups at the point of sale).
    pub fn price_for(&self, unit: UnitKind) -> Money {
        match unit {
            UnitKind::Wholesale => self.wholesale_price(),
            UnitKind::Retail => self.retail_price(),
        }
    }
}

// =============================================================================
// Entry Movement
// =============================================================================

/// An inventory entry (stock in). Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct EntryMovement {
    pub id: String,

    /// Business date of the entry (may differ from `created_at`).
    pub entry_date: NaiveDate,

    pub product_id: String,

    /// Which tier this entry stocks.
    pub unit: UnitKind,

    /// Quantity received, in `unit` terms.
    pub quantity: i64,

    /// Catalog price for `unit`, captured at entry time (USD cents).
    pub unit_price_cents: i64,

    /// quantity × unit price (USD cents).
    pub total_cents: i64,

    pub created_at: DateTime<Utc>,
}

impl EntryMovement {
    /// Returns the captured unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the entry total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Sale Movement
// =============================================================================

/// A sale (stock out). Immutable once created.
///
/// The quantity is partitioned into exactly one of `qty_wholesale` /
/// `qty_retail` - never both nonzero on one record. Totals are frozen at
/// creation time with the tax and exchange rate then in effect: a later
/// configuration change never rewrites a recorded sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleMovement {
    pub id: String,

    /// Business date of the sale.
    pub sale_date: NaiveDate,

    pub product_id: String,

    /// Which tier was sold.
    pub unit: UnitKind,

    /// Packs sold (zero unless `unit` is Wholesale).
    pub qty_wholesale: i64,

    /// Single units sold (zero unless `unit` is Retail).
    pub qty_retail: i64,

    /// Caller-supplied unit price (USD cents).
    pub unit_price_cents: i64,

    /// Pre-tax subtotal (USD cents).
    pub subtotal_cents: i64,

    /// Tax amount (USD cents).
    pub tax_cents: i64,

    /// Subtotal + tax (USD cents).
    pub total_cents: i64,

    /// Total converted to Bs at the creation-time exchange rate (Bs cents).
    pub total_b_cents: i64,

    pub created_at: DateTime<Utc>,
}

impl SaleMovement {
    /// The quantity sold, regardless of tier.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.qty_wholesale + self.qty_retail
    }

    /// Returns the pre-tax subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the with-tax total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Returns the Bs total as Money.
    #[inline]
    pub fn total_b(&self) -> Money {
        Money::from_cents(self.total_b_cents)
    }
}

// =============================================================================
// Configuration Snapshot
// =============================================================================

/// The store-wide configuration read at operation time.
///
/// Sales capture the rate and tax in their own columns at creation; stock
/// valuation always re-reads the current snapshot, so inventory value
/// drifts with the rate while recorded sales do not.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ConfigSnapshot {
    /// Bs per USD, fixed-point ten-thousandths (355_000 = 35.5000).
    pub exchange_rate_scaled: i64,

    /// Tax in basis points (3000 = 30.00%).
    pub tax_rate_bps: u32,

    /// Date the exchange rate was last set.
    pub rate_date: NaiveDate,

    /// Reference date of the program/config itself.
    pub program_date: NaiveDate,

    /// Company display name.
    pub store_name: String,
}

impl ConfigSnapshot {
    /// Returns the exchange rate.
    #[inline]
    pub fn exchange_rate(&self) -> ExchangeRate {
        ExchangeRate::from_scaled(self.exchange_rate_scaled)
    }

    /// Returns the tax rate.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(3000);
        assert_eq!(rate.bps(), 3000);
        assert!((rate.percentage() - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(30.0);
        assert_eq!(rate.bps(), 3000);
    }

    #[test]
    fn test_exchange_rate_from_rate() {
        let rate = ExchangeRate::from_rate(35.50);
        assert_eq!(rate.scaled(), 355_000);
        assert!((rate.rate() - 35.50).abs() < 0.0001);
    }

    #[test]
    fn test_price_for_tier() {
        let product = Product {
            id: "p1".to_string(),
            code: "H001".to_string(),
            name: "Eggs".to_string(),
            description: None,
            category: Some("Protein".to_string()),
            retail_price_cents: 15,
            wholesale_price_cents: 12,
            units_per_pack: 30,
            created_at: Utc::now(),
        };

        assert_eq!(product.price_for(UnitKind::Wholesale).cents(), 12);
        assert_eq!(product.price_for(UnitKind::Retail).cents(), 15);
    }
}
