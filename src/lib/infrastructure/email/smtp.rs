//! SMTP email service implementation

use async_trait::async_trait;
use clap::Parser;
use lettre::{
    message::{header::ContentType, MultiPart, SinglePart},
    SmtpTransport, Transport,
};

use crate::domain::mailer::{
    errors::MailerError,
    message::{BodyPart, Message, PartKind},
    Mailer,
};

/// SMTP configuration
///
/// Host and port of the server the test email is submitted to. The
/// defaults target the dev server's listener on `localhost:2525`.
#[derive(Clone, Debug, Parser)]
pub struct SmtpConfig {
    /// The SMTP host
    #[clap(long, env = "SMTP_HOST", default_value = "localhost")]
    pub host: String,

    /// The SMTP port
    #[clap(long, env = "SMTP_PORT", default_value = "2525")]
    pub port: u16,
}

/// SMTP mailer
///
/// Speaks plain, unauthenticated SMTP; the dev server offers neither
/// AUTH nor TLS.
#[derive(Clone, Debug)]
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    /// Create a new SMTP mailer
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Build the transport for the configured host and port
    ///
    /// The returned value owns the connection for the duration of a
    /// send and closes it when dropped, on every exit path.
    pub fn transport(&self) -> SmtpTransport {
        SmtpTransport::builder_dangerous(self.config.host.as_str())
            .port(self.config.port)
            .build()
    }
}

/// Map a domain [`Message`] onto a serializable MIME message
///
/// Parts are laid out as one `multipart/alternative` container holding
/// a leaf per body part, in the order the message carries them.
fn build_email(message: &Message) -> Result<lettre::Message, MailerError> {
    let mut parts = message.parts.iter();

    let first = parts.next().ok_or(MailerError::EmptyMessage)?;

    let mut alternative = MultiPart::alternative().singlepart(single_part(first));
    for part in parts {
        alternative = alternative.singlepart(single_part(part));
    }

    Ok(lettre::Message::builder()
        .from(message.from.as_str().parse()?)
        .to(message.to.as_str().parse()?)
        .subject(message.subject.clone())
        .multipart(alternative)?)
}

fn single_part(part: &BodyPart) -> SinglePart {
    let content_type = match part.kind {
        PartKind::Plain => ContentType::TEXT_PLAIN,
        PartKind::Html => ContentType::TEXT_HTML,
    };

    SinglePart::builder()
        .header(content_type)
        .body(part.content.clone())
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &Message) -> Result<(), MailerError> {
        let email = build_email(message)?;

        tracing::debug!(
            host = %self.config.host,
            port = self.config.port,
            "submitting message"
        );

        self.transport().send(&email)?;

        Ok(())
    }
}
