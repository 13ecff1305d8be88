//! Configuration for the validator CLI.

use crate::types::Result;
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

/// Filter a list of package names down to those with more than one release
/// published on the package index.
///
/// Names are read one per line from stdin (or --file); names that validate
/// are written one per line, in input order, to stdout (or --output).
#[derive(Parser, Debug, Clone)]
#[command(name = "pypivet")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// File containing package names (one per line); defaults to stdin
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Base URL of the package index
    #[arg(long, env = "PYPIVET_INDEX_URL", default_value = "https://pypi.org")]
    pub index_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Read the raw name list from `--file` or stdin.
    pub fn read_input(&self) -> Result<String> {
        match self.file {
            Some(ref path) => Ok(std::fs::read_to_string(path)?),
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }
}
