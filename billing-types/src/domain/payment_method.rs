//! Payment method domain model.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier for a payment method.
///
/// These are provider-issued tokens (e.g. `pm_1`), not UUIDs, so the
/// newtype wraps the token string as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentMethodId(String);

impl PaymentMethodId {
    /// Creates a PaymentMethodId from a provider token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PaymentMethodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PaymentMethodId {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for PaymentMethodId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// The kind of instrument backing a payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Card,
    Bank,
    Paypal,
}

impl std::fmt::Display for MethodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MethodKind::Card => write!(f, "card"),
            MethodKind::Bank => write!(f, "bank"),
            MethodKind::Paypal => write!(f, "paypal"),
        }
    }
}

/// A tokenized payment instrument.
///
/// Immutable once created; transactions own a copy of the method they
/// were charged against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Provider-issued token
    pub id: PaymentMethodId,
    /// Kind of instrument
    pub kind: MethodKind,
    /// Last four digits of the instrument number
    pub last4: String,
    /// Optional expiry (e.g. `12/27`); not all kinds carry one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
}

impl PaymentMethod {
    /// Creates a new payment method.
    ///
    /// # Validation
    /// - `last4` must be exactly four ASCII digits
    pub fn new(
        id: impl Into<PaymentMethodId>,
        kind: MethodKind,
        last4: impl Into<String>,
        expiry: Option<String>,
    ) -> Result<Self, DomainError> {
        let last4 = last4.into();
        if last4.len() != 4 || !last4.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::Validation(format!(
                "last4 must be four digits, got {:?}",
                last4
            )));
        }

        Ok(Self {
            id: id.into(),
            kind,
            last4,
            expiry,
        })
    }

    /// Reconstructs a payment method from stored fields, without validation.
    pub fn from_parts(
        id: PaymentMethodId,
        kind: MethodKind,
        last4: String,
        expiry: Option<String>,
    ) -> Self {
        Self {
            id,
            kind,
            last4,
            expiry,
        }
    }
}
