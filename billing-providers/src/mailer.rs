//! Simulated email provider.

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use billing_types::{EmailMessage, Mailer, MailerError};

/// Email provider that collects messages in an in-memory outbox.
///
/// Accepted messages get a `msg_`-prefixed id. A failing variant is
/// available for exercising provider-error paths.
pub struct SimulatedMailer {
    outbox: Mutex<Vec<EmailMessage>>,
    fail: bool,
}

impl SimulatedMailer {
    /// Creates a mailer that accepts every message.
    pub fn new() -> Self {
        Self {
            outbox: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Creates a mailer where every delivery fails.
    pub fn failing() -> Self {
        Self {
            outbox: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Returns the accepted messages, in delivery order.
    pub async fn outbox(&self) -> Vec<EmailMessage> {
        self.outbox.lock().await.clone()
    }

    /// Number of accepted messages.
    pub async fn sent(&self) -> usize {
        self.outbox.lock().await.len()
    }
}

impl Default for SimulatedMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for SimulatedMailer {
    async fn deliver(&self, message: &EmailMessage) -> Result<String, MailerError> {
        if self.fail {
            return Err(MailerError::Provider("simulated delivery failure".into()));
        }

        let message_id = format!("msg_{}", Uuid::new_v4().simple());
        self.outbox.lock().await.push(message.clone());
        tracing::debug!(%message_id, to = ?message.to, "simulated delivery");
        Ok(message_id)
    }
}
