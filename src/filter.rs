//! Driver filtering a name list against the index.

use crate::registry::ReleaseSource;
use crate::types::Result;
use std::io::Write;
use tracing::debug;

/// Split raw input into candidate package names.
///
/// Every non-empty line is a name, taken verbatim. Order is preserved and
/// duplicates are kept.
pub fn parse_names(input: &str) -> Vec<String> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Sequential filter over a release source.
pub struct Filter<S> {
    source: S,
}

impl<S: ReleaseSource> Filter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Verdict for a single name. Not-found maps to false; transport and
    /// parse failures propagate.
    pub async fn validate(&self, name: &str) -> Result<bool> {
        Ok(self.source.check_package(name).await?.is_valid())
    }

    /// Validate `names` in order, writing each valid name to `out` as soon
    /// as it is confirmed. Returns the valid names, still in input order.
    ///
    /// An error aborts the run; names already written stay written.
    pub async fn run<W: Write>(&self, names: &[String], out: &mut W) -> Result<Vec<String>> {
        let mut valid = Vec::new();

        for name in names {
            if self.validate(name).await? {
                writeln!(out, "{}", name)?;
                out.flush()?;
                valid.push(name.clone());
            } else {
                debug!("Rejected: {}", name);
            }
        }

        Ok(valid)
    }
}
