//! # Billing Store
//!
//! Concrete store implementations (adapters) for the billing system.
//! This crate provides adapters that implement the `TransactionStore` port:
//!
//! - [`MemoryStore`] - in-process store, always available
//! - `SqliteStore` - SQLite-backed store, behind the `sqlite` feature

pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "sqlite")]
mod types;


pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
