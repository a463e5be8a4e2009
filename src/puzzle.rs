use std::collections::BTreeSet;

use log::debug;
use thiserror::Error;

use crate::placement::Placement;
use crate::theme::{ThemeId, ThemeSet, MAX_THEMES};
use crate::verifier::{self, Relabeling};
use crate::zone::Zone;

/// Reasons puzzle data is rejected at load time.
///
/// Any of these means the configuration itself is broken and the puzzle must
/// not become playable; they are never surfaced to a player as a wrong answer.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The puzzle document was not parseable JSON.
    #[error("malformed puzzle document: {0}")]
    MalformedDocument(#[from] serde_json::Error),
    /// A zone key did not parse under any supported grammar.
    #[error("unrecognized zone key `{0}`")]
    BadZoneKey(String),
    /// The puzzle declares no themes at all.
    #[error("a puzzle needs at least one theme")]
    NoThemes,
    /// More themes than the engine's zone keys can carry.
    #[error("a puzzle supports at most {MAX_THEMES} themes")]
    TooManyThemes,
    /// The puzzle declares no zones at all.
    #[error("a puzzle needs at least one zone")]
    NoZones,
    /// A zone was declared over the empty theme subset.
    #[error("a zone must name at least one theme")]
    EmptyZone,
    /// A zone names a theme beyond the declared theme count.
    #[error("zone `{zone}` names a theme beyond the {theme_count} this puzzle has")]
    ThemeOutOfRange {
        /// The offending zone key.
        zone: ThemeSet,
        /// How many themes the puzzle declares.
        theme_count: ThemeId,
    },
    /// The same zone key appears twice in the layout.
    #[error("zone `{0}` is declared more than once")]
    DuplicateZone(ThemeSet),
    /// A zone was declared with no word slots.
    #[error("zone `{0}` has zero capacity")]
    ZeroCapacity(ThemeSet),
    /// The solution assigns words to a zone the layout does not have.
    #[error("solution references zone `{0}`, which is not in the layout")]
    UnknownSolutionZone(ThemeSet),
    /// A zone's solution entry does not fill it exactly.
    #[error("zone `{zone}` holds {assigned} solution words but has capacity {capacity}")]
    CapacityMismatch {
        /// The offending zone key.
        zone: ThemeSet,
        /// The zone's declared capacity.
        capacity: usize,
        /// How many words the solution puts there.
        assigned: usize,
    },
    /// The vocabulary and the zone slots disagree in size.
    #[error("{words} vocabulary words cannot fill {slots} zone slots")]
    SizeMismatch {
        /// Vocabulary size.
        words: usize,
        /// Total capacity across all zones.
        slots: usize,
    },
    /// The same word is assigned to more than one solution zone.
    #[error("word `{0}` appears in more than one solution zone")]
    DuplicateWord(String),
    /// The solution uses a word the vocabulary does not have.
    #[error("word `{0}` is in the solution but not in the vocabulary")]
    UnknownWord(String),
    /// The same word is listed twice in the vocabulary.
    #[error("word `{0}` is listed twice in the vocabulary")]
    RepeatedVocabularyWord(String),
    /// A vocabulary word never appears in the solution.
    #[error("word `{0}` is in the vocabulary but not in the solution")]
    UnplacedWord(String),
}

/// An immutable, validated puzzle: theme display names, zone layout,
/// vocabulary, and the canonical solution.
///
/// `Puzzle`s come out of [`PuzzleBuilder`](crate::builder::PuzzleBuilder) or
/// [`PuzzleDocument`](crate::PuzzleDocument), both of which run
/// [`is_well_formed`](Puzzle::is_well_formed) before handing one over, so a
/// `Puzzle` in hand is always playable.
#[derive(Clone, Debug)]
pub struct Puzzle {
    pub(crate) theme_names: Vec<String>,
    pub(crate) zones: Vec<Zone>,
    pub(crate) vocabulary: Vec<String>,
    pub(crate) solution: Placement,
}

impl Puzzle {
    /// N, the number of themes.
    pub fn theme_count(&self) -> ThemeId {
        self.theme_names.len() as ThemeId
    }

    /// Theme display names, indexed by `ThemeId - 1`. Presentation only;
    /// verification never looks at them.
    pub fn theme_names(&self) -> &[String] {
        &self.theme_names
    }

    /// Display name of one theme.
    pub fn theme_name(&self, theme: ThemeId) -> Option<&str> {
        (theme >= 1)
            .then(|| self.theme_names.get(theme as usize - 1))
            .flatten()
            .map(String::as_str)
    }

    /// The zone layout, in declaration order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// The full vocabulary, in word-bank order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// The canonical solution: a complete placement of the vocabulary.
    pub fn solution(&self) -> &Placement {
        &self.solution
    }

    /// Sum of all zone capacities; a board with this many placed words is full.
    pub fn total_capacity(&self) -> usize {
        self.zones.iter().map(|zone| zone.capacity).sum()
    }

    /// The zone for a theme subset, or `None` when the curated layout omits it.
    pub fn zone_for(&self, themes: ThemeSet) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.themes == themes)
    }

    /// Whether `placement` matches the solution under some relabeling of themes.
    pub fn is_solved_by(&self, placement: &Placement) -> bool {
        self.matching_relabeling(placement).is_some()
    }

    /// The first theme relabeling under which `placement` matches the
    /// solution, or `None` (also for any incomplete board). See
    /// [`matching_relabeling`](crate::matching_relabeling).
    pub fn matching_relabeling(&self, placement: &Placement) -> Option<Relabeling> {
        verifier::matching_relabeling(self, placement)
    }

    /// Validate the whole configuration.
    ///
    /// Checks that every vocabulary word sits in exactly one solution zone,
    /// that the solution fills every zone exactly to capacity, and that the
    /// layout itself is coherent (non-empty subsets, in-range theme ids, no
    /// duplicate zones). Loaders call this once and fail closed; it carries
    /// no per-verification cost.
    pub fn is_well_formed(&self) -> Result<(), ConfigurationError> {
        if self.theme_names.is_empty() {
            return Err(ConfigurationError::NoThemes);
        }
        if self.theme_names.len() > MAX_THEMES {
            return Err(ConfigurationError::TooManyThemes);
        }
        let theme_count = self.theme_count();
        if self.zones.is_empty() {
            return Err(ConfigurationError::NoZones);
        }

        let mut seen_zones = BTreeSet::new();
        for zone in &self.zones {
            if zone.themes.is_empty() {
                return Err(ConfigurationError::EmptyZone);
            }
            if zone.themes.max_theme().unwrap_or(0) > theme_count {
                return Err(ConfigurationError::ThemeOutOfRange {
                    zone: zone.themes,
                    theme_count,
                });
            }
            if zone.capacity == 0 {
                return Err(ConfigurationError::ZeroCapacity(zone.themes));
            }
            if !seen_zones.insert(zone.themes) {
                return Err(ConfigurationError::DuplicateZone(zone.themes));
            }
        }

        for (zone, _) in self.solution.iter() {
            if self.zone_for(zone).is_none() {
                return Err(ConfigurationError::UnknownSolutionZone(zone));
            }
        }
        for zone in &self.zones {
            let assigned = self.solution.words_in(zone.themes).len();
            if assigned != zone.capacity {
                return Err(ConfigurationError::CapacityMismatch {
                    zone: zone.themes,
                    capacity: zone.capacity,
                    assigned,
                });
            }
        }

        if self.vocabulary.len() != self.total_capacity() {
            return Err(ConfigurationError::SizeMismatch {
                words: self.vocabulary.len(),
                slots: self.total_capacity(),
            });
        }

        let mut placed_words = BTreeSet::new();
        for (_, words) in self.solution.iter() {
            for word in words {
                if !placed_words.insert(word.as_str()) {
                    return Err(ConfigurationError::DuplicateWord(word.clone()));
                }
                if !self.vocabulary.iter().any(|w| w == word) {
                    return Err(ConfigurationError::UnknownWord(word.clone()));
                }
            }
        }
        let mut vocabulary_words = BTreeSet::new();
        for word in &self.vocabulary {
            if !vocabulary_words.insert(word.as_str()) {
                return Err(ConfigurationError::RepeatedVocabularyWord(word.clone()));
            }
            if !placed_words.contains(word.as_str()) {
                return Err(ConfigurationError::UnplacedWord(word.clone()));
            }
        }

        // Curated layouts need not be closed under relabeling (the 9-zone
        // 4-theme grid is not); relabelings that leave the layout can simply
        // never match. Worth knowing when debugging a puzzle, not an error.
        if log::log_enabled!(log::Level::Debug) {
            let viable = verifier::relabelings(theme_count)
                .filter(|relabeling| {
                    self.zones
                        .iter()
                        .all(|zone| self.zone_for(relabeling.apply(zone.themes)).is_some())
                })
                .count();
            let total: usize = (1..=theme_count as usize).product();
            debug!("{viable} of {total} theme relabelings stay within the zone layout");
        }

        Ok(())
    }
}
