//! Canned email content

pub mod test_email;
