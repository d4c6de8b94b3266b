//! The canned test email

use crate::domain::mailer::{
    errors::MailerError, message::Message, value_objects::email_address::EmailAddress,
};

/// The fixed test email the demo binary submits
///
/// Both renderings carry the same wording; only the markup differs.
#[derive(Debug)]
pub struct TestEmail;

impl TestEmail {
    /// The subject header
    pub const SUBJECT: &'static str = "Test Email from Python";

    /// The sender address
    pub const FROM: &'static str = "sender@example.com";

    /// The recipient address
    pub const TO: &'static str = "recipient@example.com";

    /// Renders the plain text version of the email
    pub fn render_plain() -> String {
        String::from("This is a test email sent from Python!")
    }

    /// Renders the HTML version of the email
    pub fn render_html() -> String {
        String::from(
            r#"<html>
  <head></head>
  <body>
    <h1>Test Email</h1>
    <p>This is a <strong>test email</strong> sent from Python!</p>
  </body>
</html>"#,
        )
    }

    /// Builds the full [`Message`], plain part first, HTML part second
    pub fn message() -> Result<Message, MailerError> {
        let mut message = Message::new(
            EmailAddress::new(Self::FROM)?,
            EmailAddress::new(Self::TO)?,
            Self::SUBJECT,
        );

        message.push_plain(Self::render_plain());
        message.push_html(Self::render_html());

        Ok(message)
    }
}
