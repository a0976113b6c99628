//! # bodega-engine: Transaction Processors & Reporting for Bodega
//!
//! The orchestration layer between pure logic and storage: it resolves
//! catalog codes, reads the configuration snapshot at operation time, runs
//! the computations from bodega-core, and appends immutable movements
//! through bodega-db.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Write path (strict)                                                │
//! │                                                                     │
//! │  SaleRequest / EntryRequest                                         │
//! │       │ validate → resolve code → read config → compute             │
//! │       ▼                                                             │
//! │  one atomic ledger append (SaleMovement / EntryMovement)            │
//! │                                                                     │
//! │  Read path (lenient)                                                │
//! │                                                                     │
//! │  code ──► reconcile (4 filtered sums) ──► StockLevel                │
//! │                  │                                                  │
//! │                  ▼  + catalog prices + current rate                 │
//! │            StockValue ──► InventoryReport / summaries               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`service`] - [`InventoryService`] handle, stock/valuation reads,
//!   [`OversellPolicy`]
//! - [`sale`] - `record_sale` and [`SaleRequest`]
//! - [`entry`] - `record_entry` and [`EntryRequest`]
//! - [`report`] - inventory report, daily sales summary, entries total
//! - [`error`] - the caller-facing error taxonomy

// =============================================================================
// Module Declarations
// =============================================================================

pub mod entry;
pub mod error;
pub mod report;
pub mod sale;
pub mod service;

#[cfg(test)]
pub(crate) mod testutil;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use entry::EntryRequest;
pub use error::{EngineError, EngineResult};
pub use report::{DailySalesSummary, EntriesTotal, InventoryLine, InventoryReport};
pub use sale::SaleRequest;
pub use service::{InventoryService, OversellPolicy};
