//! # bodega-db: Database Layer for Bodega
//!
//! SQLite persistence for the catalog, the configuration row, and the
//! append-only movement ledger, via sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  bodega-engine (record_sale, record_entry, reports)                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                   bodega-db (THIS CRATE)                      │ │
//! │  │                                                               │ │
//! │  │   ┌─────────────┐   ┌───────────────┐   ┌──────────────┐     │ │
//! │  │   │  Database   │   │ Repositories  │   │  Migrations  │     │ │
//! │  │   │  (pool.rs)  │◄──│ product.rs    │   │  (embedded)  │     │ │
//! │  │   │  SqlitePool │   │ movement.rs   │   │ 001_init.sql │     │ │
//! │  │   │  WAL mode   │   │ config.rs     │   │              │     │ │
//! │  │   └─────────────┘   └───────────────┘   └──────────────┘     │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (or :memory: in tests)                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (product, movement, config)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bodega_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/bodega.db")).await?;
//! let product = db.products().get_by_code("H001").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::config::ConfigRepository;
pub use repository::movement::{DailySalesRow, MovementRepository};
pub use repository::product::ProductRepository;
