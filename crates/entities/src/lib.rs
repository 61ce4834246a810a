//! Core entity definitions for the user service.
//!
//! This crate defines the data types shared between the store and the HTTP
//! server.

mod user;

pub use user::*;
