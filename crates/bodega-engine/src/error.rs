//! # Engine Error Types
//!
//! The error taxonomy callers see at the boundary:
//!
//! - `ProductNotFound` - unknown product code on a write; nothing mutated
//! - `Validation` - malformed input, rejected before any computation
//! - `InsufficientStock` - oversell rejected under `OversellPolicy::Reject`
//! - `Persistence` - ledger append failed; no partial record exists, the
//!   caller may retry with the same inputs
//!
//! Every variant carries a Display message fit for the user-facing surface.
//! None are swallowed: reads of missing products degrade to zero stock
//! instead of erroring, but writes always surface their failure.

use thiserror::Error;

use bodega_core::ValidationError;
use bodega_db::DbError;

// =============================================================================
// Engine Error
// =============================================================================

/// Errors surfaced by the transaction processors and reporting layer.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Product code does not resolve to a catalog product.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A sale would exceed reconciled stock and the policy rejects oversell.
    #[error("Insufficient stock for {code}: available {available}, requested {requested}")]
    InsufficientStock {
        code: String,
        available: i64,
        requested: i64,
    },

    /// Input validation failed before any computation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Ledger or catalog persistence failed; the operation left no partial
    /// record behind.
    #[error("Persistence error: {0}")]
    Persistence(#[from] DbError),
}

/// Convenience type alias for Results with EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

// =============================================================================
// Unit Tests
// =============================================================================
