//! Programmatic puzzle assembly and zone-key grammar translation.
//!
//! Documents and callers may name zones in whichever grammar they have;
//! everything is translated to canonical [`ThemeSet`] keys here, at the
//! loading boundary, so the rest of the crate only ever sees one scheme.

use log::debug;

use crate::placement::Placement;
use crate::puzzle::{ConfigurationError, Puzzle};
use crate::theme::{ThemeId, ThemeSet, MAX_THEMES};
use crate::zone::Zone;

/// Translate an external zone key into canonical form.
///
/// Accepts the canonical digit concatenation (`"2"`, `"13"`, `"1234"`) as
/// well as the grammars older puzzle documents use: `"only-3"` for a
/// single-theme zone, dash-separated lists like `"1-2"`, and `"center"` for
/// the all-themes zone.
pub fn parse_zone_key(key: &str, theme_count: ThemeId) -> Result<ThemeSet, ConfigurationError> {
    if key == "center" {
        return Ok(ThemeSet::full(theme_count));
    }
    let digits: String = key
        .strip_prefix("only-")
        .unwrap_or(key)
        .split('-')
        .collect();
    ThemeSet::parse_digits(&digits).ok_or_else(|| ConfigurationError::BadZoneKey(key.to_owned()))
}

/// Assembles a [`Puzzle`] piece by piece.
///
/// Zone keys may be in any grammar [`parse_zone_key`] accepts. Nothing is
/// checked until [`build`](PuzzleBuilder::build), which translates the keys,
/// runs [`Puzzle::is_well_formed`] on the result, and fails closed: an
/// invalid configuration never becomes a playable puzzle.
#[derive(Clone, Default)]
pub struct PuzzleBuilder {
    theme_names: Vec<String>,
    zones: Vec<(String, usize)>,
    assignments: Vec<(String, Vec<String>)>,
    vocabulary: Option<Vec<String>>,
}

impl PuzzleBuilder {
    /// Start a puzzle with the given theme display names; their number fixes N.
    pub fn new<I, S>(themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            theme_names: themes.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Declare a zone by key and capacity.
    pub fn zone(mut self, key: &str, capacity: usize) -> Self {
        self.zones.push((key.to_owned(), capacity));
        self
    }

    /// Assign a zone's solution words. Assigning the same key twice appends.
    pub fn assign<I, S>(mut self, key: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assignments
            .push((key.to_owned(), words.into_iter().map(Into::into).collect()));
        self
    }

    /// Declare the vocabulary explicitly, in word-bank order. When omitted it
    /// is derived from the solution assignments.
    pub fn vocabulary<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Translate, validate, and produce the immutable puzzle.
    pub fn build(self) -> Result<Puzzle, ConfigurationError> {
        if self.theme_names.len() > MAX_THEMES {
            return Err(ConfigurationError::TooManyThemes);
        }
        let theme_count = self.theme_names.len() as ThemeId;

        let mut zones = Vec::with_capacity(self.zones.len());
        for (key, capacity) in &self.zones {
            zones.push(Zone {
                themes: parse_zone_key(key, theme_count)?,
                capacity: *capacity,
            });
        }

        let mut solution = Placement::new();
        for (key, words) in self.assignments {
            let zone = parse_zone_key(&key, theme_count)?;
            for word in words {
                solution.push(zone, word);
            }
        }

        let vocabulary = self.vocabulary.unwrap_or_else(|| {
            solution
                .iter()
                .flat_map(|(_, words)| words.iter().cloned())
                .collect()
        });

        let puzzle = Puzzle {
            theme_names: self.theme_names,
            zones,
            vocabulary,
            solution,
        };
        puzzle.is_well_formed()?;
        debug!(
            "loaded puzzle: {} themes, {} zones, {} words",
            puzzle.theme_count(),
            puzzle.zones().len(),
            puzzle.vocabulary().len()
        );
        Ok(puzzle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_keys_parse() {
        assert_eq!(parse_zone_key("2", 3).unwrap().to_string(), "2");
        assert_eq!(parse_zone_key("13", 3).unwrap().to_string(), "13");
        assert_eq!(parse_zone_key("1234", 4).unwrap().to_string(), "1234");
    }

    #[test]
    fn legacy_grammars_normalize() {
        assert_eq!(parse_zone_key("only-2", 3).unwrap().to_string(), "2");
        assert_eq!(parse_zone_key("2-1", 3).unwrap().to_string(), "12");
        assert_eq!(parse_zone_key("center", 3).unwrap().to_string(), "123");
        assert_eq!(parse_zone_key("center", 4).unwrap().to_string(), "1234");
    }

    #[test]
    fn junk_keys_are_rejected() {
        for key in ["", "only-", "zone-a", "0", "1_2"] {
            assert!(matches!(
                parse_zone_key(key, 3),
                Err(ConfigurationError::BadZoneKey(bad)) if bad == key
            ));
        }
    }
}
