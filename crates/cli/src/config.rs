use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

/// Settings for one run of the driver.
///
/// Every field has a default, so a TOML file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub lower: f64,
    pub upper: f64,
    pub tolerance_percent: f64,
    pub max_iterations: usize,
    pub precision: u32,
    pub require_sign_change: bool,
    pub authors: [String; 2],
    pub output: PathBuf,
    pub json: Option<PathBuf>,
    pub page_height: Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            lower: 3.0,
            upper: 6.0,
            tolerance_percent: 0.005,
            max_iterations: 100,
            precision: 4,
            require_sign_change: false,
            authors: ["First author".to_owned(), "Second author".to_owned()],
            output: PathBuf::from("bisection_report.txt"),
            json: None,
            page_height: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl RunConfig {
    /// Loads a run config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigFileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replaces the leading author labels with `names`, in order.
    pub fn set_authors(&mut self, names: &[String]) {
        for (slot, name) in self.authors.iter_mut().zip(names) {
            slot.clone_from(name);
        }
    }
}
