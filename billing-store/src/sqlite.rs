//! SQLite store adapter.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use billing_types::{CustomerId, StoreError, Transaction, TransactionId, TransactionStore};

use crate::types::DbTransaction;

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Store
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite store implementation.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a new SQLite store with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        // Run migration from migration file
        tracing::debug!("applying sqlite schema");
        let ddl = include_str!("../migrations/0001_create_transactions.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Store implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl TransactionStore for SqliteStore {
    async fn record(
        &self,
        transaction: &Transaction,
        owner: Option<CustomerId>,
    ) -> Result<(), StoreError> {
        let id_str = transaction.id.to_string();
        let customer_str = owner.map(|c| c.to_string());
        let currency_str = transaction.amount.currency().to_string();
        let status_str = transaction.status.to_string();
        let kind_str = transaction.payment_method.kind.to_string();
        let created_at_str = transaction.created_at.to_rfc3339();
        let updated_at_str = transaction.updated_at.to_rfc3339();

        sqlx::query(
            r#"INSERT INTO transactions
               (id, customer_id, amount, currency, status, method_id, method_kind, method_last4, method_expiry, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&id_str)
        .bind(&customer_str)
        .bind(transaction.amount.amount())
        .bind(&currency_str)
        .bind(&status_str)
        .bind(transaction.payment_method.id.as_str())
        .bind(&kind_str)
        .bind(&transaction.payment_method.last4)
        .bind(&transaction.payment_method.expiry)
        .bind(&created_at_str)
        .bind(&updated_at_str)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    async fn update(&self, transaction: &Transaction) -> Result<(), StoreError> {
        let id_str = transaction.id.to_string();
        let status_str = transaction.status.to_string();
        let updated_at_str = transaction.updated_at.to_rfc3339();

        let result = sqlx::query(
            r#"UPDATE transactions SET status = ?, updated_at = ? WHERE id = ?"#,
        )
        .bind(&status_str)
        .bind(&updated_at_str)
        .bind(&id_str)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn get(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError> {
        let id_str = id.to_string();

        let row: Option<DbTransaction> = sqlx::query_as(
            r#"SELECT id, amount, currency, status, method_id, method_kind, method_last4, method_expiry, created_at, updated_at
               FROM transactions WHERE id = ?"#,
        )
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        row.map(DbTransaction::into_domain).transpose()
    }

    async fn list_for_customer(
        &self,
        customer: CustomerId,
    ) -> Result<Vec<Transaction>, StoreError> {
        let customer_str = customer.to_string();

        let rows: Vec<DbTransaction> = sqlx::query_as(
            r#"SELECT id, amount, currency, status, method_id, method_kind, method_last4, method_expiry, created_at, updated_at
               FROM transactions WHERE customer_id = ?
               ORDER BY created_at DESC"#,
        )
        .bind(&customer_str)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        rows.into_iter().map(DbTransaction::into_domain).collect()
    }
}
