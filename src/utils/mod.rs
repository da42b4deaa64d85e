//! Utility functions for freegroup-growth

use crate::algebra::Word;
use crate::Result;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write `value` as pretty-printed JSON to `path`, replacing the file
pub fn save_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

/// Read a JSON document from `path`, e.g. a saved
/// [`GrowthConfig`](crate::GrowthConfig) or [`GrowthReport`](crate::GrowthReport)
pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Generate a random reduced word.
///
/// Draws `factors` letters from `alphabet` with nonzero exponents in
/// `-max_exponent..=max_exponent`, then reduces. The result may be shorter
/// than requested when neighbours cancel. Fails if `alphabet` holds anything
/// but ASCII letters.
pub fn random_word<R: Rng>(
    rng: &mut R,
    alphabet: &[char],
    factors: usize,
    max_exponent: i64,
) -> Result<Word> {
    if alphabet.is_empty() || max_exponent < 1 {
        return Ok(Word::identity());
    }

    let raw: Vec<(char, i64)> = (0..factors)
        .map(|_| {
            let letter = alphabet[rng.gen_range(0..alphabet.len())];
            let magnitude = rng.gen_range(1..=max_exponent);
            let exponent = if rng.gen_bool(0.5) { magnitude } else { -magnitude };
            (letter, exponent)
        })
        .collect();
    Word::from_factors(raw)
}

/// Timing utilities
pub mod timing {
    use std::time::Instant;
    use tracing::info;

    /// Run `f` and log how long it took under `name`
    pub fn timed<T, F: FnOnce() -> T>(name: &str, f: F) -> T {
        let start = Instant::now();
        let out = f();
        info!(name, seconds = start.elapsed().as_secs_f64(), "finished");
        out
    }
}
