//! CLI adapter for the virtual wardrobe.
//!
//! The binary wires concrete storage and the Gemini client together in
//! [`bootstrap`] and dispatches subcommands to [`handlers`].

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{bootstrap, CliConfig, CliContext};
pub use commands::{Commands, OutfitCommand, SelectCommand, TokenCommand};
pub use parser::Cli;
