//! Mailer errors

use lettre::{address::AddressError, error::Error as MessageError, transport::smtp::Error as SmtpError};
use thiserror::Error;

use crate::domain::mailer::value_objects::email_address::EmailAddressError;

/// Errors surfaced by a [`Mailer`](crate::domain::mailer::Mailer)
#[derive(Debug, Error)]
pub enum MailerError {
    /// The SMTP conversation failed: connection, protocol or delivery
    #[error(transparent)]
    SendError(#[from] SmtpError),

    /// Invalid email address
    #[error("Invalid email address")]
    InvalidEmail,

    /// The message was handed to the transport without any body part
    #[error("message contains no body parts")]
    EmptyMessage,

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for MailerError {
    fn from(err: anyhow::Error) -> Self {
        MailerError::UnknownError(err)
    }
}

impl From<AddressError> for MailerError {
    fn from(_err: AddressError) -> Self {
        MailerError::InvalidEmail
    }
}

impl From<EmailAddressError> for MailerError {
    fn from(_err: EmailAddressError) -> Self {
        MailerError::InvalidEmail
    }
}

impl From<MessageError> for MailerError {
    fn from(err: MessageError) -> Self {
        MailerError::UnknownError(err.into())
    }
}
