//! Breadth-first generation of spheres in a Cayley graph

use super::{Connection, Connector, NoConnections};
use crate::algebra::{Word, IDENTITY};
use crate::Result;
use num_rational::Rational64;
use std::collections::HashMap;
use tracing::debug;

/// Successive levels of a Cayley graph with respect to a fixed generating set.
///
/// Level `n` holds the words first reached after `n` steps from the identity.
/// Inverses are NOT added to the generators; include them explicitly if the
/// symmetric graph is wanted.
///
/// `Levels` keeps no adjacency of its own. Pass a [`Connector`] to observe
/// edges as they are found, e.g. [`CayleyGraph`](super::CayleyGraph).
pub struct Levels<C = NoConnections> {
    /// Generators, fixed at construction
    generators: Vec<Word>,
    /// Contiguous levels, level 0 first
    levels: Vec<Vec<Word>>,
    /// Every word seen so far and the level it was first seen at
    seen: HashMap<Word, usize>,
    /// Hook receiving connections
    connector: C,
}

impl Levels<NoConnections> {
    /// Create levels for the given generators. Nothing is generated yet.
    pub fn new(generators: &[Word]) -> Self {
        Self::with_connector(generators, NoConnections)
    }

    /// Create levels and generate up to `number_of_levels` (inclusive)
    pub fn generate(generators: &[Word], number_of_levels: usize) -> Result<Self> {
        let mut levels = Self::new(generators);
        levels.generate_up_to(number_of_levels)?;
        Ok(levels)
    }
}

impl<C: Connector> Levels<C> {
    /// Create levels reporting connections to `connector`
    pub fn with_connector(generators: &[Word], connector: C) -> Self {
        Levels {
            generators: generators.to_vec(),
            levels: Vec::new(),
            seen: HashMap::new(),
            connector,
        }
    }

    /// Ensure levels `0..=last_level` exist. Existing levels are kept and
    /// only the missing ones are computed.
    ///
    /// A product overflowing its exponents stops generation with an error.
    /// Levels completed before that stay in place and the failing level is
    /// not recorded at all.
    pub fn generate_up_to(&mut self, last_level: usize) -> Result<()> {
        if self.levels.is_empty() {
            self.seen.insert(IDENTITY.clone(), 0);
            self.levels.push(vec![IDENTITY.clone()]);
        }

        while !self.has_level(last_level) {
            self.generate_next_level()?;
        }
        Ok(())
    }

    /// Generate one level past the current last one
    fn generate_next_level(&mut self) -> Result<()> {
        let current_number = self.levels.len() - 1;
        let next_number = current_number + 1;
        let current = &self.levels[current_number];
        let generators = &self.generators;

        // Every product first, so a failure leaves the seen map and the hook
        // untouched
        let edges: Vec<(&Word, &Word)> = current
            .iter()
            .flat_map(|parent| generators.iter().map(move |generator| (parent, generator)))
            .collect();
        let products = edges
            .iter()
            .map(|(parent, generator)| parent.multiply(generator))
            .collect::<Result<Vec<_>>>()?;

        let mut next = Vec::new();
        for ((parent, generator), child) in edges.into_iter().zip(products) {
            match self.seen.get(&child) {
                Some(&child_level) => {
                    self.connector.connect(&Connection {
                        parent,
                        parent_level: current_number,
                        child: &child,
                        child_level,
                        edge: generator,
                        is_new: false,
                    });
                }
                None => {
                    self.seen.insert(child.clone(), next_number);
                    self.connector.connect(&Connection {
                        parent,
                        parent_level: current_number,
                        child: &child,
                        child_level: next_number,
                        edge: generator,
                        is_new: true,
                    });
                    next.push(child);
                }
            }
        }

        debug!(level = next_number, size = next.len(), seen = self.seen.len(), "generated level");
        self.levels.push(next);
        Ok(())
    }

    /// Whether level `index` has been generated
    pub fn has_level(&self, index: usize) -> bool {
        index < self.levels.len()
    }

    /// Sizes of all generated levels, starting from level 0
    pub fn level_sizes(&self) -> Vec<usize> {
        self.levels.iter().map(Vec::len).collect()
    }

    /// Ratios of successive level sizes: `[|L1|/|L0|, |L2|/|L1|, ...]`
    pub fn level_ratios(&self) -> Vec<f64> {
        self.levels
            .windows(2)
            .map(|pair| pair[1].len() as f64 / pair[0].len() as f64)
            .collect()
    }

    /// Exact ratios of successive level sizes. `None` where the lower level
    /// is empty.
    pub fn level_ratios_exact(&self) -> Vec<Option<Rational64>> {
        self.levels
            .windows(2)
            .map(|pair| {
                let (lower, upper) = (pair[0].len() as i64, pair[1].len() as i64);
                (lower != 0).then(|| Rational64::new(upper, lower))
            })
            .collect()
    }

    /// Words of a level in discovery order
    pub fn level(&self, index: usize) -> Option<&[Word]> {
        self.levels.get(index).map(Vec::as_slice)
    }

    /// All generated levels
    pub fn levels(&self) -> &[Vec<Word>] {
        &self.levels
    }

    /// Number of generated levels (including level 0)
    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    /// Level a word was first seen at, if it has been seen
    pub fn level_of(&self, word: &Word) -> Option<usize> {
        self.seen.get(word).copied()
    }

    /// Total number of words discovered
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    /// The generating list
    pub fn generators(&self) -> &[Word] {
        &self.generators
    }

    /// The connection hook
    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Consume the levels, returning the connection hook
    pub fn into_connector(self) -> C {
        self.connector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{X, Y};
    use crate::FreeGroupError;

    fn symmetric_rank_two() -> Vec<Word> {
        vec![X.clone(), X.inverse(), Y.clone(), Y.inverse()]
    }

    #[test]
    fn test_nothing_generated_on_construction() {
        let levels = Levels::new(&symmetric_rank_two());
        assert_eq!(levels.num_levels(), 0);
        assert!(levels.level_sizes().is_empty());
        assert!(levels.level_ratios().is_empty());
    }

    #[test]
    fn test_free_group_rank_two() {
        let levels = Levels::generate(&symmetric_rank_two(), 3).unwrap();
        assert_eq!(levels.level_sizes(), vec![1, 4, 12, 36]);
        assert_eq!(levels.level_ratios(), vec![4.0, 3.0, 3.0]);
        assert_eq!(
            levels.level_ratios_exact(),
            vec![
                Some(Rational64::from_integer(4)),
                Some(Rational64::from_integer(3)),
                Some(Rational64::from_integer(3)),
            ]
        );
        assert_eq!(levels.seen_count(), 1 + 4 + 12 + 36);
    }

    #[test]
    fn test_level_zero_is_identity() {
        let levels = Levels::generate(&symmetric_rank_two(), 0).unwrap();
        assert_eq!(levels.level(0), Some(&[IDENTITY.clone()][..]));
        assert_eq!(levels.level_of(&IDENTITY), Some(0));
    }

    #[test]
    fn test_discovery_order_follows_generators() {
        let levels = Levels::generate(&symmetric_rank_two(), 1).unwrap();
        let first: Vec<String> = levels.level(1).unwrap().iter().map(|w| w.to_string()).collect();
        assert_eq!(first, vec!["x", "x-1", "y", "y-1"]);
    }

    #[test]
    fn test_positive_generators_only() {
        // Without inverses the words are the positive monoid words
        let levels = Levels::generate(&[X.clone(), Y.clone()], 4).unwrap();
        assert_eq!(levels.level_sizes(), vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn test_incremental_generation() {
        let mut levels = Levels::new(&symmetric_rank_two());
        levels.generate_up_to(2).unwrap();
        let seen_before = levels.seen_count();
        let xy = Word::parse("xy").unwrap();
        assert_eq!(levels.level_of(&xy), Some(2));

        levels.generate_up_to(1).unwrap();
        assert_eq!(levels.level_sizes(), vec![1, 4, 12]);

        levels.generate_up_to(3).unwrap();
        assert_eq!(levels.level_sizes(), vec![1, 4, 12, 36]);
        assert!(levels.seen_count() > seen_before);
        assert_eq!(levels.level_of(&xy), Some(2));
    }

    #[test]
    fn test_redundant_generator() {
        // xy adds shortcuts; words are counted once at their first level
        let gens = vec![X.clone(), Y.clone(), Word::parse("xy").unwrap()];
        let levels = Levels::generate(&gens, 2).unwrap();
        assert_eq!(levels.level_sizes()[1], 3);
        let total: usize = levels.level_sizes().iter().sum();
        assert_eq!(total, levels.seen_count());
    }

    #[test]
    fn test_empty_generating_set() {
        let levels = Levels::generate(&[], 2).unwrap();
        assert_eq!(levels.level_sizes(), vec![1, 0, 0]);
        let ratios = levels.level_ratios();
        assert_eq!(ratios[0], 0.0);
        assert!(ratios[1].is_nan());
        assert_eq!(levels.level_ratios_exact()[1], None);
    }

    #[test]
    fn test_connection_counts() {
        let mut new_count = vec![0usize; 4];
        let mut old_count = vec![0usize; 4];
        let gens = symmetric_rank_two();
        {
            let hook = |c: &Connection<'_>| {
                assert_eq!(c.child, &c.parent.multiply(c.edge).unwrap());
                if c.is_new {
                    assert_eq!(c.child_level, c.parent_level + 1);
                    new_count[c.parent_level] += 1;
                } else {
                    assert!(c.child_level <= c.parent_level + 1);
                    old_count[c.parent_level] += 1;
                }
            };
            let mut levels = Levels::with_connector(&gens, hook);
            levels.generate_up_to(3).unwrap();
        }
        let sizes = [1usize, 4, 12];
        for (k, size) in sizes.iter().enumerate() {
            assert_eq!(new_count[k] + old_count[k], size * gens.len());
        }
        assert_eq!(new_count[..3], [4, 12, 36]);
        assert_eq!(old_count[..3], [0, 4, 12]);
    }

    #[test]
    fn test_seen_child_keeps_its_first_level() {
        let gens = vec![X.clone(), Word::parse("x2").unwrap()];
        let mut reported = Vec::new();
        {
            let mut levels = Levels::with_connector(&gens, |c: &Connection<'_>| {
                reported.push((c.child.to_string(), c.child_level, c.is_new))
            });
            levels.generate_up_to(2).unwrap();
        }
        let expected = [
            ("x", 1, true),
            ("x2", 1, true),
            ("x2", 1, false),
            ("x3", 2, true),
            ("x3", 2, false),
            ("x4", 2, true),
        ];
        let expected: Vec<_> = expected
            .iter()
            .map(|&(child, level, is_new)| (child.to_string(), level, is_new))
            .collect();
        assert_eq!(reported, expected);
    }

    #[test]
    fn test_overflowing_level_is_not_recorded() {
        let big = Word::from_factors([('x', 1i64 << 62)]).unwrap();
        let mut calls = 0;
        let result = {
            let mut levels = Levels::with_connector(&[big], |_: &Connection<'_>| calls += 1);
            let result = levels.generate_up_to(3);
            assert_eq!(levels.level_sizes(), vec![1, 1]);
            assert_eq!(levels.seen_count(), 2);
            result
        };
        assert!(matches!(result, Err(FreeGroupError::ExponentOverflow('x'))));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_has_level_at_usize_max() {
        let mut levels = Levels::new(&symmetric_rank_two());
        assert!(!levels.has_level(0));
        assert!(!levels.has_level(usize::MAX));
        levels.generate_up_to(1).unwrap();
        assert!(levels.has_level(1));
        assert!(!levels.has_level(2));
        assert!(!levels.has_level(usize::MAX));
    }
}
