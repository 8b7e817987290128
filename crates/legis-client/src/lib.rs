//! Legis Client - HTTP clients for the Legifrance API
//!
//! - [`auth`] - OAuth client-credentials token acquisition
//! - [`legifrance`] - search endpoint, convenience searches and a connectivity check
//!
//! # Overview
//!
//! Operations come in two flavours: `try_*` methods return
//! `Result<_, AppError>`, while the plain ones log the error and return
//! `None`, which is what the CLI uses.

pub mod auth;
mod http;
pub mod legifrance;

// Re-export main client types
pub use auth::Authenticator;
pub use legifrance::{LegifranceClient, PingOutcome};
