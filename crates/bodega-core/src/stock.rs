//! # Stock Reconciliation & Valuation
//!
//! Derives current stock and its monetary value from ledger sums. The ledger
//! itself is append-only; nothing here mutates state and nothing rounds
//! except the final Bs conversion.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Movement Ledger                                                    │
//! │    Σ entries (wholesale)  ─┐                                        │
//! │    Σ entries (retail)     ─┤                                        │
//! │    Σ sales   (wholesale)  ─┼──► StockLevel::reconcile ──► StockLevel│
//! │    Σ sales   (retail)     ─┘        + units_per_pack                │
//! │                                                                     │
//! │  StockLevel + catalog prices + exchange rate                        │
//! │                     │                                               │
//! │                     ▼                                               │
//! │            StockValue::valuate ──► { usd, Bs }                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Wholesale entries feed the retail count through the conversion factor:
//! a pack received is `units_per_pack` sellable units. Wholesale sales
//! decrement only the pack count; retail sales decrement only units.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{ExchangeRate, Product};

// =============================================================================
// Stock Level
// =============================================================================

/// Reconciled stock for one product, in both unit systems.
///
/// Either figure may be negative: the ledger records what happened, and
/// overselling is a policy question for the transaction processor, not a
/// floor enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StockLevel {
    /// Packs on hand: wholesale entries minus wholesale sales.
    pub wholesale: i64,

    /// Sellable single units: wholesale entries × units_per_pack
    /// + retail entries - retail sales.
    pub retail_units: i64,
}

impl StockLevel {
    /// Zero stock - also what an unknown product reconciles to.
    #[inline]
    pub const fn zero() -> Self {
        StockLevel {
            wholesale: 0,
            retail_units: 0,
        }
    }

    /// Derives stock from ledger sums. Exact integer math, no rounding.
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::stock::StockLevel;
    ///
    /// // 10 packs of 30 received, 5 single units sold
    /// let stock = StockLevel::reconcile(10, 0, 0, 5, 30);
    /// assert_eq!(stock.wholesale, 10);
    /// assert_eq!(stock.retail_units, 295);
    /// ```
    pub fn reconcile(
        entries_wholesale: i64,
        entries_retail: i64,
        sales_wholesale: i64,
        sales_retail: i64,
        units_per_pack: i64,
    ) -> Self {
        StockLevel {
            wholesale: entries_wholesale - sales_wholesale,
            retail_units: entries_wholesale * units_per_pack + entries_retail - sales_retail,
        }
    }

    /// True when neither figure is positive - such products are left out of
    /// inventory listings (their movements stay in the ledger).
    pub fn is_depleted(&self) -> bool {
        self.wholesale <= 0 && self.retail_units <= 0
    }
}

// =============================================================================
// Stock Value
// =============================================================================

/// Monetary value of reconciled stock, in both currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StockValue {
    /// Value in USD cents (exact).
    pub usd_cents: i64,

    /// Value in Bs cents, converted at the current rate (rounded at this
    /// boundary only).
    pub b_cents: i64,
}

impl StockValue {
    /// Zero value.
    #[inline]
    pub const fn zero() -> Self {
        StockValue {
            usd_cents: 0,
            b_cents: 0,
        }
    }

    /// Values stock at catalog prices and the current exchange rate.
    ///
    /// `usd = wholesale × wholesale_price + retail_units × retail_price`
    /// is exact integer cents; only the Bs conversion rounds.
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::stock::{StockLevel, StockValue};
    /// use bodega_core::types::{ExchangeRate, Product};
    /// use chrono::Utc;
    ///
    /// let product = Product {
    ///     id: "p1".into(),
    ///     code: "H001".into(),
    ///     name: "Eggs".into(),
    ///     description: None,
    ///     category: None,
    ///     retail_price_cents: 15,
    ///     wholesale_price_cents: 12,
    ///     units_per_pack: 30,
    ///     created_at: Utc::now(),
    /// };
    /// let stock = StockLevel { wholesale: 10, retail_units: 295 };
    /// let value = StockValue::valuate(&stock, &product, ExchangeRate::from_scaled(355_000));
    ///
    /// // 10 × 0.12 + 295 × 0.15 = 45.45 USD; × 35.50 = Bs 1613.48 (rounded)
    /// assert_eq!(value.usd_cents, 4545);
    /// assert_eq!(value.b_cents, 161_348);
    /// ```
    pub fn valuate(stock: &StockLevel, product: &Product, rate: ExchangeRate) -> Self {
        let usd = product.wholesale_price().times(stock.wholesale)
            + product.retail_price().times(stock.retail_units);

        StockValue {
            usd_cents: usd.cents(),
            b_cents: usd.to_b(rate).cents(),
        }
    }

    /// Returns the USD value as Money.
    #[inline]
    pub fn usd(&self) -> Money {
        Money::from_cents(self.usd_cents)
    }

    /// Returns the Bs value as Money.
    #[inline]
    pub fn b(&self) -> Money {
        Money::from_cents(self.b_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
