//! Legis CLI - Command-line interface for searching Legifrance
//!
//! This crate provides the `legis` binary on top of `legis-client`.
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use legis_cli::{Command, Config};
//!
//! let config = Config::try_parse_from([
//!     "legis", "--client-id", "id", "--client-secret", "secret", "ping",
//! ])
//! .unwrap();
//! assert_eq!(config.command, Some(Command::Ping));
//! ```

pub mod config;
pub mod output;

pub use config::{Command, Config};
