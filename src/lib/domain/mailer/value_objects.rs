//! Value objects used by the mailer

pub mod email_address;
