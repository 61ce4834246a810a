//! Domain services.

pub mod registration;
