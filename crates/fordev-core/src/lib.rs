//! fordev Core - Foundation crate for the fordev generator client.
//!
//! This crate provides the shared types, error handling and configuration
//! management that the generator crate builds on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based client configuration with XDG paths
//! - [`types`] - Shared domain enums (`Uf`, `Sex`)
//!
//! # Example
//!
//! ```rust
//! use fordev_core::{ClientConfig, Uf};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::default();
//! assert_eq!(config.timeout_secs, 10);
//!
//! let state: Uf = "sp".parse()?;
//! assert_eq!(state.code(), "SP");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{ConfigError, ConfigResult, CoreError, Result};
pub use types::{Sex, Uf};
