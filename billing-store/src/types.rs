//! Database row types and parsing helpers for the SQLite adapter.

use sqlx::FromRow;

use billing_types::{
    Currency, MethodKind, Money, PaymentMethod, PaymentMethodId, StoreError, Transaction,
    TransactionId, TransactionStatus,
};

// ─────────────────────────────────────────────────────────────────────────────
// Database row structs (derive FromRow for automatic mapping)
// ─────────────────────────────────────────────────────────────────────────────

/// Transaction row from the database.
///
/// SQLite has no native UUID or timestamp types; ids are TEXT UUIDs and
/// timestamps are RFC 3339 TEXT.
#[derive(FromRow)]
pub struct DbTransaction {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    pub method_id: String,
    pub method_kind: String,
    pub method_last4: String,
    pub method_expiry: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing helpers
// ─────────────────────────────────────────────────────────────────────────────

pub fn parse_currency(s: &str) -> Result<Currency, StoreError> {
    match s {
        "USD" => Ok(Currency::USD),
        "EUR" => Ok(Currency::EUR),
        "GBP" => Ok(Currency::GBP),
        _ => Err(StoreError::Database(format!("Unknown currency: {}", s))),
    }
}

pub fn parse_status(s: &str) -> Result<TransactionStatus, StoreError> {
    match s {
        "PENDING" => Ok(TransactionStatus::Pending),
        "COMPLETED" => Ok(TransactionStatus::Completed),
        "FAILED" => Ok(TransactionStatus::Failed),
        "REFUNDED" => Ok(TransactionStatus::Refunded),
        _ => Err(StoreError::Database(format!("Unknown status: {}", s))),
    }
}

pub fn parse_method_kind(s: &str) -> Result<MethodKind, StoreError> {
    match s {
        "card" => Ok(MethodKind::Card),
        "bank" => Ok(MethodKind::Bank),
        "paypal" => Ok(MethodKind::Paypal),
        _ => Err(StoreError::Database(format!("Unknown method kind: {}", s))),
    }
}

pub fn parse_timestamp(s: &str) -> Result<chrono::DateTime<chrono::Utc>, StoreError> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .map_err(|e| StoreError::Database(e.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Domain conversion
// ─────────────────────────────────────────────────────────────────────────────

impl DbTransaction {
    /// Convert database row to domain Transaction.
    pub fn into_domain(self) -> Result<Transaction, StoreError> {
        let uuid =
            uuid::Uuid::parse_str(&self.id).map_err(|e| StoreError::Database(e.to_string()))?;
        let currency = parse_currency(&self.currency)?;
        let amount = Money::new(self.amount, currency).map_err(StoreError::Domain)?;
        let status = parse_status(&self.status)?;
        let method = PaymentMethod::from_parts(
            PaymentMethodId::new(self.method_id),
            parse_method_kind(&self.method_kind)?,
            self.method_last4,
            self.method_expiry,
        );
        let created_at = parse_timestamp(&self.created_at)?;
        let updated_at = parse_timestamp(&self.updated_at)?;

        Ok(Transaction::from_parts(
            TransactionId::from_uuid(uuid),
            amount,
            status,
            method,
            created_at,
            updated_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_into_domain() {
        let row = DbTransaction {
            id: "6f9619ff-8b86-4d01-b42d-00cf4fc964ff".to_string(),
            amount: 1050,
            currency: "USD".to_string(),
            status: "COMPLETED".to_string(),
            method_id: "pm_1".to_string(),
            method_kind: "card".to_string(),
            method_last4: "4242".to_string(),
            method_expiry: None,
            created_at: "2026-01-05T12:00:00+00:00".to_string(),
            updated_at: "2026-01-05T12:00:01+00:00".to_string(),
        };

        let tx = row.into_domain().unwrap();

        assert_eq!(tx.amount.amount(), 1050);
        assert_eq!(tx.status, TransactionStatus::Completed);
        assert_eq!(tx.payment_method.kind, MethodKind::Card);
        assert!(tx.updated_at > tx.created_at);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result = parse_status("SETTLED");
        assert!(matches!(result, Err(StoreError::Database(_))));
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        let result = parse_timestamp("yesterday");
        assert!(matches!(result, Err(StoreError::Database(_))));
    }
}
