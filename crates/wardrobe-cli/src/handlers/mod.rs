//! Command handlers.
//!
//! Each handler receives the composed [`crate::bootstrap::CliContext`]
//! and delegates domain work to the core services.

pub mod add;
pub mod filter;
pub mod generate;
pub mod list;
pub mod outfit;
pub mod remove;
pub mod select;
pub mod token;
pub mod update;
