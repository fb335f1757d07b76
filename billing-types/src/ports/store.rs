//! Transaction store port trait.
//!
//! Persistence is an explicit collaborator with its own contract.
//! Adapters (in-memory, SQLite) implement it.

use crate::domain::{CustomerId, Transaction, TransactionId};
use crate::error::StoreError;

/// Persistence port for transactions.
///
/// Transactions are keyed by id. The optional owner passed to [`record`]
/// is a store-side index only - the `Transaction` entity itself carries no
/// customer linkage.
///
/// [`record`]: TransactionStore::record
#[async_trait::async_trait]
pub trait TransactionStore: Send + Sync + 'static {
    /// Persists a new transaction, optionally indexed to a customer.
    async fn record(
        &self,
        transaction: &Transaction,
        owner: Option<CustomerId>,
    ) -> Result<(), StoreError>;

    /// Persists a status change to an already-recorded transaction.
    ///
    /// Fails with [`StoreError::NotFound`] if the id was never recorded.
    async fn update(&self, transaction: &Transaction) -> Result<(), StoreError>;

    /// Gets a transaction by id.
    async fn get(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError>;

    /// Lists a customer's transactions, newest first.
    ///
    /// Unknown customers yield an empty list, not an error.
    async fn list_for_customer(
        &self,
        customer: CustomerId,
    ) -> Result<Vec<Transaction>, StoreError>;
}
