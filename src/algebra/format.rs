//! Output formats for rendering words and tables

use crate::FreeGroupError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported rendering targets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, exponents written inline (`x2y-1`)
    Text,
    /// LaTeX math, exponents as superscripts (`$x^{2}$`)
    Latex,
    /// HTML, exponents in `<sup>` tags
    #[default]
    Html,
}

impl FromStr for OutputFormat {
    type Err = FreeGroupError;

    /// Case-insensitive lookup by name
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "txt" | "text" | "plain-text" => Ok(OutputFormat::Text),
            "tex" | "latex" => Ok(OutputFormat::Latex),
            "html" => Ok(OutputFormat::Html),
            _ => Err(FreeGroupError::UnsupportedFormat(name.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Latex => "latex",
            OutputFormat::Html => "html",
        };
        write!(f, "{}", name)
    }
}
