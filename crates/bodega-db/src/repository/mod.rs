//! # Repository Implementations
//!
//! One repository per aggregate:
//!
//! - [`product`] - catalog CRUD and lookups
//! - [`movement`] - the append-only entry/sale ledger and its filtered sums
//! - [`config`] - the singleton configuration row
//!
//! Repositories are cheap to construct (they clone the pool handle) and are
//! handed out by [`crate::Database`] accessor methods.

pub mod config;
pub mod movement;
pub mod product;
