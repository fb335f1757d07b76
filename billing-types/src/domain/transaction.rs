//! Transaction domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::money::Money;
use super::payment_method::PaymentMethod;
use crate::error::DomainError;

/// Unique identifier for a Transaction.
///
/// Random v4 UUIDs; ids must stay unique under concurrent creation, which
/// rules out timestamp-derived schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Creates a new random TransactionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a TransactionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns the UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Lifecycle status of a transaction.
///
/// `Refunded` is a terminal state of its own rather than an overload of
/// `Failed`, so a declined charge and a refunded charge stay
/// distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Created, gateway outcome not yet applied
    Pending,
    /// Gateway approved the charge
    Completed,
    /// Gateway declined the charge or was unreachable
    Failed,
    /// A completed charge that has since been refunded
    Refunded,
}

impl TransactionStatus {
    /// Returns true if no further transition is modeled from this status.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TransactionStatus::Pending)
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Pending => write!(f, "PENDING"),
            TransactionStatus::Completed => write!(f, "COMPLETED"),
            TransactionStatus::Failed => write!(f, "FAILED"),
            TransactionStatus::Refunded => write!(f, "REFUNDED"),
        }
    }
}

/// A record of one payment attempt with a lifecycle status.
///
/// A transaction is created `Pending` and finalized exactly once to
/// `Completed` or `Failed`; only a `Completed` transaction can move on to
/// `Refunded`. The type enforces these transitions - adapters reconstruct
/// stored rows through [`Transaction::from_parts`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,
    /// Amount charged, in smallest currency unit
    pub amount: Money,
    /// Lifecycle status
    pub status: TransactionStatus,
    /// Owned copy of the payment method charged
    pub payment_method: PaymentMethod,
    /// When the transaction was created
    pub created_at: DateTime<Utc>,
    /// When the status last changed
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Creates a new pending transaction with a fresh identifier.
    pub fn pending(amount: Money, payment_method: PaymentMethod) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            amount,
            status: TransactionStatus::Pending,
            payment_method,
            created_at: now,
            updated_at: now,
        }
    }

    /// Finalizes a pending transaction as completed.
    pub fn complete(&mut self) -> Result<(), DomainError> {
        self.transition_from_pending(TransactionStatus::Completed)
    }

    /// Finalizes a pending transaction as failed.
    pub fn fail(&mut self) -> Result<(), DomainError> {
        self.transition_from_pending(TransactionStatus::Failed)
    }

    /// Marks a completed transaction as refunded, refreshing `updated_at`.
    pub fn mark_refunded(&mut self) -> Result<(), DomainError> {
        if self.status != TransactionStatus::Completed {
            return Err(DomainError::NotRefundable {
                status: self.status,
            });
        }
        self.status = TransactionStatus::Refunded;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Returns true if the transaction has reached a terminal status.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns true if the transaction can be refunded.
    pub fn is_refundable(&self) -> bool {
        self.status == TransactionStatus::Completed
    }

    /// Reconstructs a transaction from stored fields.
    pub fn from_parts(
        id: TransactionId,
        amount: Money,
        status: TransactionStatus,
        payment_method: PaymentMethod,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            amount,
            status,
            payment_method,
            created_at,
            updated_at,
        }
    }

    fn transition_from_pending(&mut self, to: TransactionStatus) -> Result<(), DomainError> {
        if self.status != TransactionStatus::Pending {
            return Err(DomainError::AlreadyFinalized {
                status: self.status,
            });
        }
        self.status = to;
        self.updated_at = Utc::now();
        Ok(())
    }
}
