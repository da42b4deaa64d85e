//! Reduced words in a free group

use super::OutputFormat;
use crate::{FreeGroupError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The identity element (empty word)
pub static IDENTITY: Lazy<Word> = Lazy::new(Word::identity);

/// The generator `x`
pub static X: Lazy<Word> = Lazy::new(|| Word::single('x'));

/// The generator `y`
pub static Y: Lazy<Word> = Lazy::new(|| Word::single('y'));

/// A single factor `letter^exponent` of a reduced word
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Factor {
    /// Lowercase letter
    pub letter: char,
    /// Nonzero exponent, never `i64::MIN` so that it can always be negated
    pub exponent: i64,
}

/// A reduced word in a free group. Words are immutable.
///
/// - Letters are stored lowercase; inverses carry negative exponents
/// - No two adjacent factors share a letter and no exponent is zero
/// - The empty word is the identity
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    factors: Vec<Factor>,
}

/// Append `letter^exponent` to an already reduced factor stack.
///
/// Only the top of the stack is compared against the new factor, which is
/// enough to keep the stack reduced. Exponents must stay in
/// `-i64::MAX..=i64::MAX`; anything else is an overflow.
fn reduce_append(factors: &mut Vec<Factor>, letter: char, exponent: i64) -> Result<()> {
    if !letter.is_ascii_alphabetic() {
        return Err(FreeGroupError::InvalidArgument(format!(
            "{:?} is not an ASCII letter",
            letter
        )));
    }
    if exponent == 0 {
        return Ok(());
    }

    // Uppercase letters denote inverses
    let (letter, exponent) = if letter.is_ascii_uppercase() {
        (letter.to_ascii_lowercase(), exponent.checked_neg())
    } else {
        (letter, Some(exponent))
    };
    let exponent = in_range(exponent).ok_or(FreeGroupError::ExponentOverflow(letter))?;

    match factors.last_mut() {
        Some(last) if last.letter == letter => {
            let combined = in_range(last.exponent.checked_add(exponent))
                .ok_or(FreeGroupError::ExponentOverflow(letter))?;
            if combined == 0 {
                factors.pop();
            } else {
                last.exponent = combined;
            }
        }
        _ => factors.push(Factor { letter, exponent }),
    }
    Ok(())
}

fn in_range(exponent: Option<i64>) -> Option<i64> {
    exponent.filter(|&e| e != i64::MIN)
}

impl Word {
    /// The empty word
    pub fn identity() -> Self {
        Word { factors: Vec::new() }
    }

    /// A single letter with exponent 1 (uppercase gives the inverse).
    /// Anything but an ASCII letter is an invalid argument.
    pub fn generator(letter: char) -> Result<Self> {
        Self::from_factors([(letter, 1)])
    }

    fn single(letter: char) -> Self {
        Word {
            factors: vec![Factor { letter, exponent: 1 }],
        }
    }

    /// Parse a word such as `"xyX"`, `"x2y3y-2"` or `""`.
    ///
    /// Each factor is a letter, an optional sign and optional digits. Uppercase
    /// letters are inverses. The result is reduced while it is parsed.
    pub fn parse(text: &str) -> Result<Self> {
        WordParser::new(text).parse()
    }

    /// Build a reduced word from raw `(letter, exponent)` pairs.
    ///
    /// Fails on a letter outside `[A-Za-z]` or an exponent that does not fit
    /// once reduced.
    pub fn from_factors<I>(factors: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, i64)>,
    {
        let mut reduced = Vec::new();
        for (letter, exponent) in factors {
            reduce_append(&mut reduced, letter, exponent)?;
        }
        Ok(Word { factors: reduced })
    }

    /// Factors in order
    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    /// Check if this is the identity
    pub fn is_identity(&self) -> bool {
        self.factors.is_empty()
    }

    /// Number of factors (syllables)
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Same as [`Word::is_identity`]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Word length with respect to the letters, i.e. the sum of |exponent|
    pub fn length(&self) -> u64 {
        self.factors.iter().map(|f| f.exponent.unsigned_abs()).sum()
    }

    /// Multiply two words with free reduction across the boundary.
    ///
    /// Returns [`FreeGroupError::ExponentOverflow`] when two boundary
    /// exponents add up past the `i64` range.
    pub fn multiply(&self, other: &Word) -> Result<Word> {
        let mut factors = Vec::with_capacity(self.factors.len() + other.factors.len());
        factors.extend_from_slice(&self.factors);
        for factor in &other.factors {
            reduce_append(&mut factors, factor.letter, factor.exponent)?;
        }
        Ok(Word { factors })
    }

    /// Group inverse: reverse the factors and negate every exponent.
    /// Exponents are never `i64::MIN`, so this cannot overflow.
    pub fn inverse(&self) -> Word {
        let factors = self
            .factors
            .iter()
            .rev()
            .map(|f| Factor {
                letter: f.letter,
                exponent: -f.exponent,
            })
            .collect();
        Word { factors }
    }

    /// Render in the given output format
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.to_string(),
            OutputFormat::Latex => format!("${}$", self.render_exponents(|e| format!("^{{{}}}", e))),
            OutputFormat::Html => self.render_exponents(|e| format!("<sup>{}</sup>", e)),
        }
    }

    /// LaTeX rendering, e.g. `$x^{2}y$`
    pub fn to_latex_string(&self) -> String {
        self.render(OutputFormat::Latex)
    }

    /// HTML rendering, e.g. `x<sup>2</sup>y`
    pub fn to_html_string(&self) -> String {
        self.render(OutputFormat::Html)
    }

    fn render_exponents<F>(&self, superscript: F) -> String
    where
        F: Fn(i64) -> String,
    {
        if self.is_identity() {
            return "1".to_string();
        }

        let mut out = String::new();
        for factor in &self.factors {
            out.push(factor.letter);
            if factor.exponent != 1 {
                out.push_str(&superscript(factor.exponent));
            }
        }
        out
    }
}

impl Default for Word {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return write!(f, "1");
        }
        for factor in &self.factors {
            write!(f, "{}", factor.letter)?;
            if factor.exponent != 1 {
                write!(f, "{}", factor.exponent)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self)
    }
}

impl FromStr for Word {
    type Err = FreeGroupError;

    fn from_str(s: &str) -> Result<Self> {
        Word::parse(s)
    }
}

/// Accepts the Text rendering, including `"1"` for the identity
impl TryFrom<String> for Word {
    type Error = FreeGroupError;

    fn try_from(text: String) -> Result<Self> {
        if text == "1" {
            return Ok(Word::identity());
        }
        Word::parse(&text)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.to_string()
    }
}

/// Cursor-based parser for the factor grammar `[A-Za-z][-+]?[0-9]*`
struct WordParser<'a> {
    /// Current byte position in input
    pos: usize,
    /// Input string
    input: &'a str,
}

impl<'a> WordParser<'a> {
    fn new(input: &'a str) -> Self {
        WordParser { pos: 0, input }
    }

    fn parse(mut self) -> Result<Word> {
        let mut factors = Vec::new();

        while let Some(c) = self.peek_char() {
            if !c.is_ascii_alphabetic() {
                return Err(self.gap_error());
            }
            let start = self.pos;
            self.consume_char();
            let exponent = self.parse_exponent(start)?;
            reduce_append(&mut factors, c, exponent)?;
        }

        Ok(Word { factors })
    }

    /// Optional sign followed by optional digits; defaults to 1
    fn parse_exponent(&mut self, factor_start: usize) -> Result<i64> {
        let start = self.pos;
        if matches!(self.peek_char(), Some('+') | Some('-')) {
            self.consume_char();
        }
        let digits_start = self.pos;
        while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
            self.consume_char();
        }

        if self.pos == start {
            return Ok(1);
        }
        if self.pos == digits_start {
            // A bare sign has no magnitude
            return Err(self.malformed(factor_start));
        }

        self.input[start..self.pos]
            .parse::<i32>()
            .map(i64::from)
            .map_err(|_| self.malformed(factor_start))
    }

    /// Error for a character that does not start a factor. It is a gap if
    /// another factor follows, otherwise trailing garbage.
    fn gap_error(&self) -> FreeGroupError {
        let rest = &self.input[self.pos..];
        if rest.chars().any(|c| c.is_ascii_alphabetic()) {
            self.malformed(self.pos)
        } else {
            FreeGroupError::TrailingGarbage(self.input.to_string())
        }
    }

    fn malformed(&self, position: usize) -> FreeGroupError {
        FreeGroupError::MalformedWord {
            position,
            text: self.input.to_string(),
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn consume_char(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }
}
