//! Email provider port.

use crate::domain::EmailMessage;
use crate::error::MailerError;

/// Port trait for the email delivery provider.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Hands a message to the provider, returning its message id.
    ///
    /// Callers are expected to have validated addresses already; the
    /// provider only reports transport-level failures.
    async fn deliver(&self, message: &EmailMessage) -> Result<String, MailerError>;
}
