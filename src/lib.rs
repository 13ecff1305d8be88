//! pypivet - PyPI package name validator.
//!
//! Reads package names (one per line), checks each against the package
//! index JSON API, and keeps the names with more than one published
//! release:
//! - Fetching per-package metadata from `https://pypi.org/pypi/{name}/json`
//! - Counting entries in the release mapping
//! - Streaming the names that pass, in input order
//!
//! # Example
//!
//! ```no_run
//! use pypivet::{Filter, PypiChecker};
//!
//! #[tokio::main]
//! async fn main() {
//!     let checker = PypiChecker::new("https://pypi.org", 30).unwrap();
//!     let filter = Filter::new(checker);
//!     let valid = filter.validate("requests").await.unwrap();
//!     println!("requests valid: {}", valid);
//! }
//! ```

pub mod config;
pub mod filter;
pub mod registry;
pub mod types;

pub use config::Config;
pub use filter::Filter;
pub use registry::{PypiChecker, ReleaseSource};
pub use types::{PypivetError, ReleaseCheck, Result};
