#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Client-side companion to the SMTP dev server: builds a
//! multipart/alternative test email and submits it over a plain
//! SMTP connection.

pub mod domain;
pub mod infrastructure;
