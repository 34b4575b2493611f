//! Core types for the rolodir ecosystem.
//!
//! This crate provides shared types used by both rolodir front-ends and
//! contact providers:
//! - `Contact` and related types for address-book records
//! - `protocol` module for the front-end/provider communication protocol
//! - `provider` module for invoking provider binaries

pub mod contact;
pub mod error;
pub mod group;
pub mod protocol;
pub mod provider;

// Re-export the record types at crate root for convenience
pub use contact::*;
pub use error::{RolodirError, RolodirResult};
pub use group::Group;
