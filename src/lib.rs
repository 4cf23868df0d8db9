//! Credenv - Service-Account Credentials to Environment Commands
//!
//! Credenv reads a local service-account key file and prints the
//! deployment-platform commands a human can copy and run to register the
//! key's fields as environment variables. It never sets variables itself
//! and never talks to the platform; the printed commands are advisory
//! text, executed out of band.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the fixed field-to-variable mapping and
//!   the error types
//! - **Infrastructure Layer** (`infrastructure`): credential file loading
//! - **CLI Layer** (`cli`): command-line interface and output formatting
//!
//! # Example
//!
//! ```ignore
//! use credenv::{CredentialMapping, ServiceAccountKey};
//!
//! fn main() -> anyhow::Result<()> {
//!     let key = ServiceAccountKey::load("credentials/service-account.json".as_ref())?;
//!     let mapping = CredentialMapping::new(&key);
//!     assert_eq!(mapping.len(), 10);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::error::CredentialError;
pub use domain::mapping::{CredentialMapping, EnvVar};
pub use infrastructure::credentials::{ServiceAccountKey, REQUIRED_FIELDS};
