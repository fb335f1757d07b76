//! Email Application Service
//!
//! Validates outgoing messages and dispatches them through the mailer
//! port. Outcomes are reported per message, never as errors: a rejected
//! or failed send is a [`EmailReport`] with `success: false`.

use billing_types::{EmailMessage, EmailReport, EmailTemplate, Mailer};

/// Application service for email dispatch.
///
/// Generic over `M: Mailer`, so providers can be swapped without code
/// changes and tests can capture outgoing mail in memory.
pub struct EmailService<M: Mailer> {
    mailer: M,
}

impl<M: Mailer> EmailService<M> {
    /// Creates a new email service with the given mailer.
    pub fn new(mailer: M) -> Self {
        Self { mailer }
    }

    /// Returns a reference to the underlying mailer.
    pub fn mailer(&self) -> &M {
        &self.mailer
    }

    /// Validates and sends a single message.
    ///
    /// Validation failures short-circuit before the provider is contacted:
    /// a message with no primary recipients, or with any malformed address
    /// in `to`, `cc`, or `bcc`, is rejected with a report naming every bad
    /// address.
    #[tracing::instrument(skip(self, message), fields(subject = %message.subject, recipients = message.to.len()))]
    pub async fn send(&self, message: &EmailMessage) -> EmailReport {
        if message.to.is_empty() {
            return EmailReport::rejected("No recipients specified");
        }

        let invalid = message.invalid_addresses();
        if !invalid.is_empty() {
            return EmailReport::rejected(format!(
                "Invalid email addresses: {}",
                invalid.join(", ")
            ));
        }

        match self.mailer.deliver(message).await {
            Ok(message_id) => {
                tracing::info!(%message_id, "email sent");
                EmailReport::sent(message_id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "email send failed");
                EmailReport::rejected(e.to_string())
            }
        }
    }

    /// Sends one message per recipient from a shared template.
    ///
    /// Recipients are processed in order and every send yields a report,
    /// so the result has exactly one entry per recipient. One bad address
    /// does not stop the rest of the batch.
    #[tracing::instrument(skip(self, template, recipients), fields(subject = %template.subject, recipients = recipients.len()))]
    pub async fn send_bulk(
        &self,
        template: &EmailTemplate,
        recipients: &[String],
    ) -> Vec<EmailReport> {
        let mut reports = Vec::with_capacity(recipients.len());
        for recipient in recipients {
            let message = template.with_recipient(recipient);
            reports.push(self.send(&message).await);
        }
        reports
    }
}
