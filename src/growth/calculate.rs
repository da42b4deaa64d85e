//! Client-facing calculations over generating sets given as text.
//!
//! These functions make the usual client choices: generators arrive as
//! strings, inverses are added unless stated otherwise, and results come
//! back as plain vectors or strings.

use super::GrowthConfig;
use crate::algebra::{OutputFormat, Word};
use crate::levels::Levels;
use crate::table::CayleyTable;
use crate::utils::timing::timed;
use crate::{FreeGroupError, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Parse each string as a word, optionally adding missing inverses.
///
/// Inverses are appended in order for the original entries only, skipping
/// any that the list already contains. `["x", "y", "X"]` becomes
/// `[x, y, x^-1, y^-1]`.
pub fn parse_words<S: AsRef<str>>(words: &[S], include_inverses: bool) -> Result<Vec<Word>> {
    let mut parsed = words
        .iter()
        .map(|w| Word::parse(w.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    if include_inverses {
        add_inverses(&mut parsed);
    }
    trace!(count = parsed.len(), include_inverses, "parsed generators");
    Ok(parsed)
}

fn add_inverses(words: &mut Vec<Word>) {
    let original_len = words.len();
    for i in 0..original_len {
        let inverse = words[i].inverse();
        if !words.contains(&inverse) {
            words.push(inverse);
        }
    }
}

/// Successive ratios of spherical growth for `number_of_levels` levels.
/// Inverses are included.
///
/// `ratios(&["x", "y"], 3)` is `[4.0, 3.0, 3.0]` since the spheres of F2
/// have sizes 1, 4, 12, 36.
pub fn ratios<S: AsRef<str>>(generating_set: &[S], number_of_levels: usize) -> Result<Vec<f64>> {
    let generators = parse_words(generating_set, true)?;
    Ok(Levels::generate(&generators, number_of_levels)?.level_ratios())
}

/// Sizes of the spheres `0..=number_of_levels`. Inverses are included.
pub fn level_sizes<S: AsRef<str>>(
    generating_set: &[S],
    number_of_levels: usize,
) -> Result<Vec<usize>> {
    let generators = parse_words(generating_set, true)?;
    Ok(Levels::generate(&generators, number_of_levels)?.level_sizes())
}

/// Symmetric Cayley table of a generating set, rendered in `format`.
///
/// The format name is checked first; only HTML tables are available.
pub fn cayley_table<S: AsRef<str>>(
    generating_set: &[S],
    format: &str,
    include_inverses: bool,
) -> Result<String> {
    let format: OutputFormat = format.parse()?;
    ensure_table_format(format)?;
    let words = parse_words(generating_set, include_inverses)?;
    Ok(CayleyTable::symmetric(&words)?.to_html_string())
}

fn ensure_table_format(format: OutputFormat) -> Result<()> {
    if format != OutputFormat::Html {
        return Err(FreeGroupError::UnsupportedOperation(
            "only HTML tables are available at the moment".to_string(),
        ));
    }
    Ok(())
}

/// Everything computed for one generating set
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrowthReport {
    /// Generators used, after adding inverses, in text form
    pub generators: Vec<String>,
    /// Sphere sizes starting from level 0
    pub level_sizes: Vec<usize>,
    /// Ratios of successive sphere sizes
    pub level_ratios: Vec<f64>,
    /// Rendered Cayley table of the generators
    pub cayley_table: String,
}

/// Compute sizes, ratios and the Cayley table described by `config`
pub fn growth_report(config: &GrowthConfig) -> Result<GrowthReport> {
    config.validate()?;
    ensure_table_format(config.table_format)?;

    let generators = parse_words(config.generators.as_slice(), config.include_inverses)?;
    let levels = timed("levels", || Levels::generate(&generators, config.levels))?;
    let cayley_table =
        timed("cayley table", || CayleyTable::symmetric(&generators))?.to_html_string();

    Ok(GrowthReport {
        generators: generators.iter().map(Word::to_string).collect(),
        level_sizes: levels.level_sizes(),
        level_ratios: levels.level_ratios(),
        cayley_table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(words: &[Word]) -> Vec<String> {
        words.iter().map(Word::to_string).collect()
    }

    #[test]
    fn test_parse_words_adds_inverses() {
        let words = parse_words(&["x", "y", "X"], true).unwrap();
        assert_eq!(texts(&words), vec!["x", "y", "x-1", "y-1"]);

        let words = parse_words(&["x", "y"], false).unwrap();
        assert_eq!(texts(&words), vec!["x", "y"]);
    }

    #[test]
    fn test_parse_words_scans_original_entries_only() {
        let words = parse_words(&["xy", "x2"], true).unwrap();
        assert_eq!(texts(&words), vec!["xy", "x2", "y-1x-1", "x-2"]);

        // The identity is its own inverse
        let words = parse_words(&["", "x"], true).unwrap();
        assert_eq!(texts(&words), vec!["1", "x", "x-1"]);
    }

    #[test]
    fn test_parse_words_propagates_errors() {
        assert!(matches!(
            parse_words(&["x", "y?"], true),
            Err(FreeGroupError::TrailingGarbage(_))
        ));
    }

    #[test]
    fn test_ratios() {
        assert_eq!(ratios(&["x", "y"], 3).unwrap(), vec![4.0, 3.0, 3.0]);
        assert_eq!(ratios(&["x"], 3).unwrap(), vec![2.0, 1.0, 1.0]);
        assert!(ratios::<&str>(&[], 0).unwrap().is_empty());
    }

    #[test]
    fn test_level_sizes() {
        assert_eq!(level_sizes(&["x", "y"], 3).unwrap(), vec![1, 4, 12, 36]);
        assert_eq!(level_sizes(&["a", "b", "c"], 2).unwrap(), vec![1, 6, 30]);
    }

    #[test]
    fn test_cayley_table_formats() {
        let html = cayley_table(&["x"], "HTML", true).unwrap();
        assert!(html.starts_with("<table>\n"));
        assert!(html.contains("<td>x<sup>2</sup></td>"));

        assert!(matches!(
            cayley_table(&["x"], "latex", true),
            Err(FreeGroupError::UnsupportedOperation(_))
        ));
        assert!(matches!(
            cayley_table(&["x"], "pdf", true),
            Err(FreeGroupError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_cayley_table_without_inverses() {
        let html = cayley_table(&["x", "y"], "html", false).unwrap();
        assert_eq!(html.matches("<tr>").count(), 3);
        assert!(!html.contains("<sup>-1</sup>"));
    }

    #[test]
    fn test_growth_report() {
        let config = GrowthConfig::new(&["x", "y"]).with_levels(3);
        let report = growth_report(&config).unwrap();
        assert_eq!(report.generators, vec!["x", "y", "x-1", "y-1"]);
        assert_eq!(report.level_sizes, vec![1, 4, 12, 36]);
        assert_eq!(report.level_ratios, vec![4.0, 3.0, 3.0]);
        assert_eq!(report.cayley_table.matches("<tr>").count(), 5);

        let bad = GrowthConfig::new(&["x"]).with_table_format(OutputFormat::Text);
        assert!(matches!(
            growth_report(&bad),
            Err(FreeGroupError::UnsupportedOperation(_))
        ));
    }
}
