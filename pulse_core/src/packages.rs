//! Sensor packages: the built-in sample list and CSV package files.
//!
//! A package file holds one workout per line, with no header:
//!
//! ```text
//! # code, action_count, duration_hours, weight_kg, ...
//! SWM, 720, 1, 80, 25, 40
//! RUN, 15000, 1, 75
//! ```

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Raw reading from the sensors: an activity code and positional fields.
///
/// Fields stay textual until the package is processed, so a malformed
/// number fails only its own package.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Package {
    pub code: String,
    pub params: Vec<String>,
}

impl Package {
    pub fn new<S: AsRef<str>>(code: impl Into<String>, params: &[S]) -> Self {
        Self {
            code: code.into(),
            params: params.iter().map(|p| p.as_ref().to_string()).collect(),
        }
    }

    /// Parse the positional fields into numbers
    pub fn numbers(&self) -> Result<Vec<f64>> {
        parse_params(&self.params)
    }
}

/// The packages processed when no input file is given
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &["720", "1", "80", "25", "40"]),
        Package::new("RUN", &["15000", "1", "75"]),
        Package::new("WLK", &["9000", "1", "75", "180"]),
    ]
}

/// Parse textual parameters into numbers
pub fn parse_params<S: AsRef<str>>(raw: &[S]) -> Result<Vec<f64>> {
    raw.iter()
        .map(|s| {
            let s = s.as_ref().trim();
            s.parse::<f64>().map_err(|source| crate::Error::InvalidNumber {
                value: s.to_string(),
                source,
            })
        })
        .collect()
}

/// Load packages from a CSV file
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)?;

    let mut packages = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut fields = record.iter();
        let Some(code) = fields.next() else {
            continue;
        };
        if code.is_empty() && record.len() == 1 {
            continue;
        }
        let raw: Vec<&str> = fields.collect();
        packages.push(Package::new(code, &raw));
    }

    tracing::info!("Loaded {} packages from {:?}", packages.len(), path);
    Ok(packages)
}
