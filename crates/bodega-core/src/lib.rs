//! # bodega-core: Pure Business Logic for Bodega
//!
//! The heart of the inventory and sales system: every rule that turns ledger
//! records into stock figures and money lives here, as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Bodega Architecture                            │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                 bodega-engine (orchestration)                 │ │
//! │  │   record_sale, record_entry, inventory_report, summaries     │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │              ★ bodega-core (THIS CRATE) ★                     │ │
//! │  │                                                               │ │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌────────────┐          │ │
//! │  │  │  types  │ │  money  │ │  stock  │ │ validation │          │ │
//! │  │  │ Product │ │  Money  │ │ recon-  │ │   rules    │          │ │
//! │  │  │Movements│ │  rates  │ │ cile +  │ │   checks   │          │ │
//! │  │  │ Config  │ │         │ │ valuate │ │            │          │ │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └────────────┘          │ │
//! │  │                                                               │ │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │                 bodega-db (SQLite ledger)                     │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, movements, config, rates)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`stock`] - Stock reconciliation and valuation
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, always
//! 2. **No I/O**: database and network access are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64); rates are
//!    fixed-point basis points / ten-thousandths
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bodega_core::money::Money;
//! use bodega_core::types::{ExchangeRate, TaxRate};
//!
//! // A 100.00 USD sale at 30% tax, converted at 35.50 Bs/USD
//! let subtotal = Money::from_cents(10_000);
//! let tax = subtotal.tax(TaxRate::from_bps(3000));
//! let total = subtotal + tax;
//! let total_b = total.to_b(ExchangeRate::from_scaled(355_000));
//!
//! assert_eq!(tax.cents(), 3_000);
//! assert_eq!(total.cents(), 13_000);
//! assert_eq!(total_b.cents(), 461_500); // Bs 4615.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bodega_core::Money` instead of
// `use bodega_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use stock::{StockLevel, StockValue};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity accepted on a single movement.
///
/// Catches fat-finger input (an extra digit or three) before it lands in the
/// ledger; genuine bulk intakes come nowhere near it.
pub const MAX_MOVEMENT_QUANTITY: i64 = 1_000_000;
