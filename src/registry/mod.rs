//! Package index checking module.
//!
//! Verifies package release history against the PyPI JSON API.

pub mod pypi;

pub use pypi::{PypiChecker, ReleaseSource};
