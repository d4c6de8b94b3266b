//! Email message

use crate::domain::mailer::value_objects::email_address::EmailAddress;

/// Content kind of a single body part
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartKind {
    /// `text/plain`
    Plain,

    /// `text/html`
    Html,
}

/// One body part of a message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BodyPart {
    /// The content kind of this part
    pub kind: PartKind,

    /// The text content of this part
    pub content: String,
}

/// Email message
///
/// Parts are kept in insertion order, which is display-preference
/// order: least preferred alternative first.
#[derive(Clone, Debug)]
pub struct Message {
    /// The sender of the email
    pub from: EmailAddress,

    /// The recipient of the email
    pub to: EmailAddress,

    /// The subject of the email
    pub subject: String,

    /// The body parts of the email
    pub parts: Vec<BodyPart>,
}

impl Message {
    /// Create a new message with no body parts
    pub fn new(from: EmailAddress, to: EmailAddress, subject: impl Into<String>) -> Self {
        Self {
            from,
            to,
            subject: subject.into(),
            parts: Vec::new(),
        }
    }

    /// Append a plain text body part
    pub fn push_plain(&mut self, content: impl Into<String>) {
        self.parts.push(BodyPart {
            kind: PartKind::Plain,
            content: content.into(),
        });
    }

    /// Append an HTML body part
    pub fn push_html(&mut self, content: impl Into<String>) {
        self.parts.push(BodyPart {
            kind: PartKind::Html,
            content: content.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::domain::mailer::value_objects::email_address::EmailAddressError;

    fn message() -> Result<Message, EmailAddressError> {
        Ok(Message::new(
            EmailAddress::new("a@example.com")?,
            EmailAddress::new("b@example.com")?,
            "subject",
        ))
    }

    #[test]
    fn test_new_message_has_no_parts() -> TestResult {
        let message = message()?;

        assert!(message.parts.is_empty());

        Ok(())
    }

    #[test]
    fn test_parts_keep_insertion_order() -> TestResult {
        let mut message = message()?;

        message.push_plain("plain body");
        message.push_html("<p>html body</p>");

        assert_eq!(message.parts[0].kind, PartKind::Plain);
        assert_eq!(message.parts[0].content, "plain body");
        assert_eq!(message.parts[1].kind, PartKind::Html);
        assert_eq!(message.parts[1].content, "<p>html body</p>");

        Ok(())
    }
}
