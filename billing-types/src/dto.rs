//! Data Transfer Objects (DTOs) for requests and results.

use serde::{Deserialize, Serialize};

use crate::domain::{CustomerId, PaymentMethod};

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to charge a payment method.
///
/// Amounts are minor units; the currency is fixed to USD by the charge
/// flow, so the request does not carry one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// Customer to index the transaction under, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    /// Amount to charge in smallest currency unit
    pub amount: i64,
    /// Payment method to charge
    pub method: PaymentMethod,
}

// ─────────────────────────────────────────────────────────────────────────────
// Email DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Soft result of one email send.
///
/// Email dispatch never surfaces an `Err`: validation and provider
/// failures are folded into this report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailReport {
    pub success: bool,
    /// Provider message id, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Failure description, present when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EmailReport {
    /// Report for a message the provider accepted.
    pub fn sent(message_id: impl Into<String>) -> Self {
        Self {
            success: true,
            message_id: Some(message_id.into()),
            error: None,
        }
    }

    /// Report for a message that was not sent.
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message_id: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sent_report() {
        let report = EmailReport::sent("msg_123");
        assert!(report.success);
        assert_eq!(report.message_id.as_deref(), Some("msg_123"));
        assert!(report.error.is_none());
    }

    #[test]
    fn test_rejected_report_serializes_without_message_id() {
        let report = EmailReport::rejected("No recipients specified");
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"success":false,"error":"No recipients specified"}"#
        );
    }
}
