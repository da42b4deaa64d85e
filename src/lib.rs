//! # freegroup-growth: spherical growth in free groups
//!
//! This library computes spherical growth statistics and Cayley tables of a
//! free group with respect to an arbitrary generating set given as text.
//!
//! ## Features
//!
//! - **Word algebra**: parsing, free reduction, inversion, rendering to
//!   text, LaTeX and HTML
//! - **Levels**: incremental breadth-first generation of spheres with a
//!   connection hook for building explicit Cayley graphs
//! - **Tables**: dense Cayley tables of pairwise products
//! - **API**: growth ratios and tables straight from generator strings
//!
//! ```
//! use freegroup_growth::prelude::*;
//!
//! let ratios = freegroup_growth::growth::ratios(&["x", "y"], 3).unwrap();
//! assert_eq!(ratios, vec![4.0, 3.0, 3.0]);
//!
//! let w = Word::parse("x2y3y-2").unwrap();
//! assert_eq!(w.to_string(), "x2y");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Reduced words and output formats
pub mod algebra;

/// Level generation and Cayley graphs
pub mod levels;

/// Cayley tables
pub mod table;

/// Client-facing API and configuration
pub mod growth;

/// Utility functions and helpers
pub mod utils;

// Re-export commonly used types
pub use algebra::{OutputFormat, Word, IDENTITY};
pub use growth::{GrowthConfig, GrowthReport};
pub use levels::{CayleyGraph, Connection, Connector, Levels};
pub use table::CayleyTable;

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum FreeGroupError {
    /// Missing or invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Characters between factors, or a factor with a bad exponent
    #[error("Word malformed at position {position}: {text}")]
    MalformedWord {
        /// Byte offset of the problem
        position: usize,
        /// Whole input
        text: String,
    },

    /// Characters after the last factor
    #[error("Word has extra garbage on the end: {0}")]
    TrailingGarbage(String),

    /// A combined exponent left the `i64` range
    #[error("Exponent of {0} out of range")]
    ExponentOverflow(char),

    /// Unknown output format name
    #[error("Invalid output format: {0}")]
    UnsupportedFormat(String),

    /// Operation not available for the requested format
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, FreeGroupError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        algebra::{Factor, OutputFormat, Word, IDENTITY, X, Y},
        growth::{GrowthConfig, GrowthReport},
        levels::{CayleyGraph, Connection, Connector, Levels, NoConnections},
        table::CayleyTable,
        FreeGroupError, Result,
    };
}
