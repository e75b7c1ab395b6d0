//! Configuration.
//!
//! This module contains the settings passed into the counter and the
//! results screen:
//! - `CounterConfig` - live percentage counter
//! - `ResultsConfig` - results-screen text, view modes and diff model
//! - `Config` - both of the above, loaded from and saved to JSON

mod counter;
mod results;

pub use counter::*;
pub use results::*;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::score::MAX_DECIMAL_PRECISION;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub counter: CounterConfig,
    pub results: ResultsConfig,
}

impl Config {
    /// Load and validate a JSON config file. Missing fields take their
    /// defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::parse(&content)?;
        info!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| Error::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.validate()?;
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        for precision in [
            self.counter.decimal_precision,
            self.results.decimal_precision,
        ] {
            if precision > MAX_DECIMAL_PRECISION {
                return Err(Error::InvalidDecimalPrecision(precision));
            }
        }
        Ok(())
    }
}
