//! Error types for the billing service.
//!
//! One discipline throughout: operations return typed errors, layered the
//! same way the crates are - domain rules, store access, provider calls,
//! and the application services on top. The single exception is email
//! dispatch, whose soft per-message outcome is a value
//! ([`crate::dto::EmailReport`]), not an error.

use crate::domain::TransactionStatus;

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Amount must be positive")]
    NonPositiveAmount,

    #[error("Transaction already finalized as {status}")]
    AlreadyFinalized { status: TransactionStatus },

    #[error("Can only refund completed transactions (status is {status})")]
    NotRefundable { status: TransactionStatus },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Store-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Transaction not found")]
    NotFound,
}

/// Payment gateway errors.
///
/// A *decline* is not an error - it is a normal charge outcome. These cover
/// the cases where no outcome was obtained at all.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Gateway unreachable: {0}")]
    Unreachable(String),

    #[error("Gateway error: {0}")]
    Provider(String),
}

/// Email provider errors.
#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("Email provider error: {0}")]
    Provider(String),
}

/// Application-level errors returned by the services.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Domain(e) => e.into(),
            StoreError::NotFound => ServiceError::NotFound("Transaction not found".into()),
            StoreError::Database(e) => ServiceError::Internal(e),
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NonPositiveAmount => {
                ServiceError::InvalidArgument("Amount must be positive".into())
            }
            DomainError::AlreadyFinalized { .. } | DomainError::NotRefundable { .. } => {
                ServiceError::InvalidState(err.to_string())
            }
            DomainError::Validation(msg) => ServiceError::InvalidArgument(msg),
        }
    }
}

impl From<GatewayError> for ServiceError {
    fn from(err: GatewayError) -> Self {
        ServiceError::Gateway(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_maps_to_service_not_found() {
        let err: ServiceError = StoreError::NotFound.into();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn test_domain_amount_maps_to_invalid_argument() {
        let err: ServiceError = DomainError::NonPositiveAmount.into();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Invalid argument: Amount must be positive");
    }

    #[test]
    fn test_not_refundable_maps_to_invalid_state() {
        let err: ServiceError = DomainError::NotRefundable {
            status: TransactionStatus::Failed,
        }
        .into();
        assert!(matches!(err, ServiceError::InvalidState(_)));
    }
}
