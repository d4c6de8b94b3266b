//! Infrastructure implementations of the domain ports

pub mod email;
