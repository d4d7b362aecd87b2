//! # user-directory-core
//!
//! Data model and loader for the User Directory viewer.
//!
//! The crate exposes:
//!
//! - [`UserRecord`] and its nested [`Address`] / [`Company`] records
//! - [`UserSource`], the seam the front end fetches through
//! - [`HttpUserSource`], the `reqwest` implementation used in production
//! - [`LoadError`], the error returned when the collection cannot be loaded
//!
//! ## TLS Backend
//!
//! - **`rustls`** *(default)* — Use rustls.
//! - **`native-tls`** — Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use user_directory_core::{HttpUserSource, UserSource};
//!
//! # async fn run() -> Result<(), user_directory_core::LoadError> {
//! let source = HttpUserSource::new(user_directory_core::DEFAULT_ENDPOINT);
//! for user in source.fetch_users().await? {
//!     println!("{} <{}>", user.name, user.email);
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod loader;
mod types;
mod utils;

pub use error::LoadError;
pub use loader::{HttpUserSource, UserSource, DEFAULT_ENDPOINT};
pub use types::{Address, Company, UserRecord};
