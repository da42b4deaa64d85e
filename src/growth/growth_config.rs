//! Configuration for growth computations

use crate::algebra::OutputFormat;
use crate::{FreeGroupError, Result};
use serde::{Deserialize, Serialize};

/// What to compute for a generating set
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// Generators as text, e.g. `["x", "y", "xy"]`
    pub generators: Vec<String>,
    /// Last level to generate (inclusive)
    pub levels: usize,
    /// Add missing inverses of the generators
    pub include_inverses: bool,
    /// Format of the Cayley table
    pub table_format: OutputFormat,
}

impl GrowthConfig {
    /// Config for the given generators with default settings
    pub fn new<S: AsRef<str>>(generators: &[S]) -> Self {
        GrowthConfig {
            generators: generators.iter().map(|g| g.as_ref().to_string()).collect(),
            ..Self::default()
        }
    }

    /// Set the number of levels
    pub fn with_levels(mut self, levels: usize) -> Self {
        self.levels = levels;
        self
    }

    /// Set whether inverses are added
    pub fn with_inverses(mut self, include_inverses: bool) -> Self {
        self.include_inverses = include_inverses;
        self
    }

    /// Set the table format
    pub fn with_table_format(mut self, format: OutputFormat) -> Self {
        self.table_format = format;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.generators.is_empty() {
            return Err(FreeGroupError::InvalidArgument(
                "At least one generator is required".to_string(),
            ));
        }

        if self.levels == 0 {
            return Err(FreeGroupError::InvalidArgument(
                "Number of levels must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        GrowthConfig {
            generators: vec!["x".to_string(), "y".to_string()],
            levels: 5,
            include_inverses: true,
            table_format: OutputFormat::Html,
        }
    }
}
