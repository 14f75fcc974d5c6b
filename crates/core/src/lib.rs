//! Core types, schemas, and validation for the Sightline analytics pipeline.

pub mod error;
pub mod events;
pub mod session;

pub use error::{Error, Result};
pub use events::*;
pub use session::*;
