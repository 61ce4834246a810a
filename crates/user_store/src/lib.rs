//! User storage for the user service.
//!
//! This crate provides the [`UserStore`] abstraction over an ordered
//! collection of registered users, plus an in-memory implementation that
//! lives for the duration of the process.

mod error;
mod memory;
mod traits;

pub use error::*;
pub use memory::*;
pub use traits::*;
