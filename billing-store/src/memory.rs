//! In-memory store adapter.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use billing_types::{CustomerId, StoreError, Transaction, TransactionId, TransactionStore};

struct StoredRow {
    /// Insertion sequence, breaks `created_at` ties when ordering
    seq: u64,
    owner: Option<CustomerId>,
    transaction: Transaction,
}

/// Thread-safe in-memory transaction store.
///
/// Backed by a concurrent map keyed by transaction id. Useful for tests
/// and for running the system without a database; rows do not survive
/// the process.
#[derive(Default)]
pub struct MemoryStore {
    rows: DashMap<TransactionId, StoredRow>,
    seq: AtomicU64,
}

impl MemoryStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored transactions.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no transactions are stored.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn record(
        &self,
        transaction: &Transaction,
        owner: Option<CustomerId>,
    ) -> Result<(), StoreError> {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        self.rows.insert(
            transaction.id,
            StoredRow {
                seq,
                owner,
                transaction: transaction.clone(),
            },
        );
        Ok(())
    }

    async fn update(&self, transaction: &Transaction) -> Result<(), StoreError> {
        let mut row = self
            .rows
            .get_mut(&transaction.id)
            .ok_or(StoreError::NotFound)?;
        row.transaction = transaction.clone();
        Ok(())
    }

    async fn get(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError> {
        Ok(self.rows.get(&id).map(|row| row.transaction.clone()))
    }

    async fn list_for_customer(
        &self,
        customer: CustomerId,
    ) -> Result<Vec<Transaction>, StoreError> {
        let mut rows: Vec<(u64, Transaction)> = self
            .rows
            .iter()
            .filter(|row| row.owner == Some(customer))
            .map(|row| (row.seq, row.transaction.clone()))
            .collect();

        rows.sort_by(|a, b| {
            (b.1.created_at, b.0).cmp(&(a.1.created_at, a.0))
        });

        Ok(rows.into_iter().map(|(_, tx)| tx).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billing_types::{Currency, MethodKind, Money, PaymentMethod};

    fn transaction(amount: i64) -> Transaction {
        Transaction::pending(
            Money::new(amount, Currency::USD).unwrap(),
            PaymentMethod::new("pm_1", MethodKind::Card, "4242", None).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_record_and_get() {
        let store = MemoryStore::new();
        let tx = transaction(1000);

        store.record(&tx, None).await.unwrap();
        let fetched = store.get(tx.id).await.unwrap().unwrap();

        assert_eq!(fetched.id, tx.id);
        assert_eq!(fetched.amount.amount(), 1000);
    }

    #[tokio::test]
    async fn test_get_unknown_is_none() {
        let store = MemoryStore::new();

        let result = store.get(TransactionId::new()).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_row() {
        let store = MemoryStore::new();
        let mut tx = transaction(1000);

        store.record(&tx, None).await.unwrap();
        tx.complete().unwrap();
        store.update(&tx).await.unwrap();

        let fetched = store.get(tx.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, tx.status);
    }

    #[tokio::test]
    async fn test_update_unknown_fails() {
        let store = MemoryStore::new();
        let tx = transaction(1000);

        let result = store.update(&tx).await;

        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_for_customer_newest_first() {
        let store = MemoryStore::new();
        let alice = CustomerId::new();
        let bob = CustomerId::new();

        let first = transaction(100);
        let second = transaction(200);
        let other = transaction(300);

        store.record(&first, Some(alice)).await.unwrap();
        store.record(&second, Some(alice)).await.unwrap();
        store.record(&other, Some(bob)).await.unwrap();

        let listed = store.list_for_customer(alice).await.unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn test_list_for_unknown_customer_is_empty() {
        let store = MemoryStore::new();
        let tx = transaction(100);
        store.record(&tx, Some(CustomerId::new())).await.unwrap();

        let listed = store.list_for_customer(CustomerId::new()).await.unwrap();

        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_unowned_rows_not_listed() {
        let store = MemoryStore::new();
        let alice = CustomerId::new();
        let tx = transaction(100);
        store.record(&tx, None).await.unwrap();

        let listed = store.list_for_customer(alice).await.unwrap();

        assert!(listed.is_empty());
    }
}
