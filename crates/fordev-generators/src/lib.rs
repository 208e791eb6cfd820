//! fordev Generators - Typed client for the 4devs test-data generators.
//!
//! The site generates valid-looking Brazilian documents and records (CPF,
//! CNPJ, people, companies, vehicles and more) through HTML forms. This crate
//! wraps each form as an async method with validated filters and structured
//! output.
//!
//! # Pipeline
//!
//! Every call runs the same stages:
//!
//! 1. [`filter::validate`] checks caller filters against the operation's
//!    static descriptor and fills defaults
//! 2. [`request::build_request`] maps them onto the site's form fields
//! 3. a [`Transport`] posts the form once
//! 4. [`parser::parse`] turns the response into [`GeneratedRecord`]s
//!
//! Operations served from built-in tables (`uf`, `vehicle_brand`) stop after
//! validation.
//!
//! # Example
//!
//! ```rust,no_run
//! use fordev_generators::{FilterParameters, GeneratorClient};
//!
//! # async fn run() -> fordev_generators::Result<()> {
//! let client = GeneratorClient::new()?;
//!
//! let person = client
//!     .person(&FilterParameters::new().with("sex", "M").with("state", "SP"))
//!     .await?;
//! assert_eq!(person.text("estado"), Some("SP"));
//!
//! let cities = client.city(&FilterParameters::new().with("state", "RJ")).await?;
//! assert!(!cities.is_empty());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod catalog;
pub mod client;
pub mod error;
#[allow(missing_docs)]
pub mod filter;
pub mod operation;
pub mod parser;
#[allow(missing_docs)]
pub mod record;
#[allow(missing_docs)]
pub mod request;
pub mod transport;

// Re-export commonly used types
pub use catalog::Catalog;
pub use client::GeneratorClient;
pub use error::{GeneratorError, Result};
pub use filter::{FilterParameters, FilterValue, ValidatedFilters};
pub use operation::{Operation, OperationSpec};
pub use record::{FieldValue, Generated, GeneratedRecord};
pub use request::{build_request, FormRequest};
pub use transport::{HttpTransport, Transport};

pub use fordev_core::{ClientConfig, Sex, Uf};
