//! Email message values.

use serde::{Deserialize, Serialize};

/// A file attached to an outgoing email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: String,
    pub content: Vec<u8>,
    pub content_type: String,
}

/// An outgoing email message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Primary recipients
    pub to: Vec<String>,
    pub subject: String,
    /// Plain-text body
    pub body: String,
    /// Optional HTML alternative
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default)]
    pub cc: Vec<String>,
    #[serde(default)]
    pub bcc: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl EmailMessage {
    /// Creates a plain-text message to the given recipients.
    pub fn new(to: Vec<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to,
            subject: subject.into(),
            body: body.into(),
            html: None,
            cc: Vec::new(),
            bcc: Vec::new(),
            attachments: Vec::new(),
        }
    }

    /// Returns every malformed address across `to`, `cc`, and `bcc`,
    /// in that order.
    pub fn invalid_addresses(&self) -> Vec<&str> {
        self.to
            .iter()
            .chain(self.cc.iter())
            .chain(self.bcc.iter())
            .map(String::as_str)
            .filter(|addr| !is_valid_address(addr))
            .collect()
    }
}

/// A reusable message body without recipients, for bulk sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub subject: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default)]
    pub cc: Vec<String>,
    #[serde(default)]
    pub bcc: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl EmailTemplate {
    /// Creates a plain-text template.
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            html: None,
            cc: Vec::new(),
            bcc: Vec::new(),
            attachments: Vec::new(),
        }
    }

    /// Materializes a single-recipient message from this template.
    pub fn with_recipient(&self, to: impl Into<String>) -> EmailMessage {
        EmailMessage {
            to: vec![to.into()],
            subject: self.subject.clone(),
            body: self.body.clone(),
            html: self.html.clone(),
            cc: self.cc.clone(),
            bcc: self.bcc.clone(),
            attachments: self.attachments.clone(),
        }
    }
}

/// RFC-light address check: no whitespace, exactly one `@`, a non-empty
/// local part, and a domain with at least one dot that has characters on
/// both sides. Deliberately permissive beyond that - deliverability is the
/// provider's problem.
pub fn is_valid_address(addr: &str) -> bool {
    if addr.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = addr.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }

    match domain.rfind('.') {
        Some(dot) => dot >= 1 && dot + 1 < domain.len(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        for addr in ["alice@example.com", "a@b.c", "x.y@sub.domain.org"] {
            assert!(is_valid_address(addr), "{addr} should be valid");
        }
    }

    #[test]
    fn test_invalid_addresses() {
        for addr in [
            "not-an-email",
            "@example.com",
            "alice@",
            "alice@nodot",
            "alice@.com",
            "alice@com.",
            "al ice@example.com",
            "alice@@example.com",
            "",
        ] {
            assert!(!is_valid_address(addr), "{addr} should be invalid");
        }
    }

    #[test]
    fn test_invalid_addresses_collects_in_order() {
        let mut msg = EmailMessage::new(
            vec!["good@example.com".into(), "bad-to".into()],
            "subject",
            "body",
        );
        msg.cc = vec!["bad-cc".into()];
        msg.bcc = vec!["also@fine.net".into(), "bad-bcc".into()];

        assert_eq!(msg.invalid_addresses(), vec!["bad-to", "bad-cc", "bad-bcc"]);
    }

    #[test]
    fn test_template_with_recipient() {
        let mut template = EmailTemplate::new("Receipt", "Thanks!");
        template.cc = vec!["billing@example.com".into()];

        let msg = template.with_recipient("alice@example.com");

        assert_eq!(msg.to, vec!["alice@example.com".to_string()]);
        assert_eq!(msg.subject, "Receipt");
        assert_eq!(msg.cc, vec!["billing@example.com".to_string()]);
    }
}
