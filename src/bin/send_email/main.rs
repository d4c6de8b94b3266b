#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Sends the canned multipart test email to an SMTP server

use clap::Parser;
use testmail::{
    domain::mailer::{errors::MailerError, send_test_email},
    infrastructure::email::smtp::{SmtpConfig, SmtpMailer},
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The SMTP server to submit to
    #[clap(flatten)]
    pub smtp: SmtpConfig,
}

async fn run(args: Args) -> Result<(), MailerError> {
    let mailer = SmtpMailer::new(args.smtp);

    send_test_email(&mailer).await
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the defaults cover the
    // no-configuration case.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    println!("Connecting to {}:{}...", args.smtp.host, args.smtp.port);

    if let Err(e) = run(args).await {
        eprintln!("Error sending email: {e}");

        std::process::exit(1);
    }

    println!("Email sent successfully!");
}
