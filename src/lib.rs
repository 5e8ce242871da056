//! Person Directory Client
//!
//! Resolves identity records from the person directory service behind an
//! OAuth2 client-credentials grant:
//! - Token acquisition and a single cached bearer token
//! - Authenticated lookup by primary email
//! - Normalization of the envelope-wrapped wire shape into [`Person`]
//! - Identifier constraint checks before any network call
//!
//! ```no_run
//! use person_directory::{DirectoryClient, DirectoryConfig, PersonQuery};
//!
//! # async fn run() -> Result<(), person_directory::DirectoryError> {
//! let config = DirectoryConfig::from_env();
//! let client = DirectoryClient::new(config)?;
//! let person = client.resolve(&PersonQuery::by_email("jane@example.com")).await?;
//! println!("{} is in {} groups", person.user_id(), person.groups().len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod person;
pub mod query;
pub mod token;

pub use client::{DirectoryClient, PersonResolver};
pub use config::DirectoryConfig;
pub use error::{DirectoryError, Result};
pub use person::Person;
pub use query::{LookupKey, PersonQuery};
pub use token::TokenManager;
