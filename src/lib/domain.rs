//! Domain types and ports

pub mod mailer;
