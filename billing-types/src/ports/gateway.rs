//! Payment gateway port.
//!
//! This trait defines the interface to the external charge/refund
//! provider. Implementations can be HTTP clients, test doubles, or the
//! bundled simulation.

use serde::{Deserialize, Serialize};

use crate::domain::{Money, PaymentMethod, Transaction};
use crate::error::GatewayError;

/// The gateway's verdict on a charge attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargeOutcome {
    /// The charge was authorized
    Approved,
    /// The charge was declined
    Declined,
}

/// Port trait for the payment gateway.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    /// Attempts to charge the given method.
    ///
    /// A decline is an `Ok(ChargeOutcome::Declined)`; `Err` means no
    /// outcome was obtained (provider unreachable or rejected the call).
    async fn charge(
        &self,
        method: &PaymentMethod,
        amount: Money,
    ) -> Result<ChargeOutcome, GatewayError>;

    /// Reverses a previously completed charge with the provider.
    async fn refund(&self, transaction: &Transaction) -> Result<(), GatewayError>;
}
