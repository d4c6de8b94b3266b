//! Email delivery port

pub mod emails;
pub mod errors;
pub mod message;
pub mod value_objects;

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::mailer::{emails::test_email::TestEmail, errors::MailerError, message::Message};

/// Email delivery service
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Deliver a fully built [`Message`]
    ///
    /// # Arguments
    /// * `message` - The [`Message`] to deliver, body parts in
    ///   display-preference order.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure.
    async fn send(&self, message: &Message) -> Result<(), MailerError>;
}

/// Build the canned test email and deliver it through the given mailer
pub async fn send_test_email<M: Mailer>(mailer: &M) -> Result<(), MailerError> {
    let message = TestEmail::message()?;

    mailer.send(&message).await
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, message: &Message) -> Result<(), MailerError>;
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::domain::mailer::message::PartKind;

    #[tokio::test]
    async fn test_send_test_email_delivers_exactly_one_message() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .withf(|message| {
                message.subject == TestEmail::SUBJECT
                    && message.parts.len() == 2
                    && message.parts[0].kind == PartKind::Plain
                    && message.parts[1].kind == PartKind::Html
            })
            .times(1)
            .returning(|_| Ok(()));

        send_test_email(&mailer).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_send_test_email_surfaces_transport_failure() {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .returning(|_| Err(MailerError::EmptyMessage));

        let result = send_test_email(&mailer).await;

        assert!(result.is_err());
    }
}
