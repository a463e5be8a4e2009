use std::collections::BTreeMap;

use serde::Deserialize;

use crate::builder::PuzzleBuilder;
use crate::puzzle::{ConfigurationError, Puzzle};

/// One zone's solution entry in a puzzle document.
///
/// Venn-style documents store a word list per zone; the single-word-per-zone
/// grid variant stores a bare string. Both normalize to a word list.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ZoneEntry {
    /// A single word, as the capacity-1 grid documents write it.
    One(String),
    /// A list of words.
    Many(Vec<String>),
}

impl ZoneEntry {
    fn into_words(self) -> Vec<String> {
        match self {
            Self::One(word) => vec![word],
            Self::Many(words) => words,
        }
    }
}

/// The document shape puzzles are delivered in: theme display names (named
/// `circles` after the Venn rendering), the vocabulary in word-bank order,
/// and the canonical solution keyed by zone.
///
/// The layout is implied rather than declared: the zones are exactly the
/// solution's keys and each capacity is the length of its entry. That keeps
/// curated layouts (boards using only some theme subsets) plain data. How a
/// document reaches the engine (dated fetch, bundled file) is the host's
/// concern.
#[derive(Clone, Debug, Deserialize)]
pub struct PuzzleDocument {
    /// Theme display names, hidden from the player until reveal.
    pub circles: Vec<String>,
    /// The full vocabulary, in word-bank order.
    pub words: Vec<String>,
    /// Zone key to words, in any grammar
    /// [`parse_zone_key`](crate::builder::parse_zone_key) accepts.
    pub solution: BTreeMap<String, ZoneEntry>,
}

impl PuzzleDocument {
    /// Parse a JSON puzzle document and validate it into a [`Puzzle`].
    pub fn from_json(json: &str) -> Result<Puzzle, ConfigurationError> {
        serde_json::from_str::<PuzzleDocument>(json)?.into_puzzle()
    }

    /// Convert into a validated [`Puzzle`], failing closed on any
    /// configuration problem.
    pub fn into_puzzle(self) -> Result<Puzzle, ConfigurationError> {
        let mut builder = PuzzleBuilder::new(self.circles).vocabulary(self.words);
        for (key, entry) in self.solution {
            let words = entry.into_words();
            builder = builder.zone(&key, words.len()).assign(&key, words);
        }
        builder.build()
    }
}
