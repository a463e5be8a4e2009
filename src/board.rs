use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::placement::Placement;
use crate::puzzle::Puzzle;
use crate::theme::ThemeSet;
use crate::verifier::{self, Relabeling};

/// Rejected placement mutations.
///
/// These are synchronous and leave the board untouched; how to surface them
/// to the player is the caller's business. They never reach verification.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum PlacementViolation {
    /// Every slot in the target zone is taken.
    #[error("zone `{0}` is already full")]
    ZoneFull(ThemeSet),
    /// The word already sits in some zone; unplace or move it instead.
    #[error("`{word}` is already placed in zone `{zone}`")]
    WordAlreadyPlaced {
        /// The word in question.
        word: String,
        /// The zone it currently occupies.
        zone: ThemeSet,
    },
    /// The word is not in the zone it was supposed to move out of.
    #[error("`{word}` is not in zone `{zone}`")]
    WordNotInZone {
        /// The word in question.
        word: String,
        /// The zone it was expected in.
        zone: ThemeSet,
    },
    /// The zone key is not part of this puzzle's layout.
    #[error("this puzzle has no zone `{0}`")]
    NoSuchZone(ThemeSet),
    /// The word is not part of this puzzle's vocabulary.
    #[error("`{0}` is not a word in this puzzle")]
    NoSuchWord(String),
}

/// A puzzle in play: the immutable model plus the player's current placement.
///
/// The board is the single writer of placement state. Every mutation takes
/// `&mut self`, so a verification call always reads an internally consistent
/// snapshot.
pub struct Board {
    puzzle: Puzzle,
    placement: Placement,
}

impl Board {
    /// Start an empty board over `puzzle`.
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            placement: Placement::new(),
        }
    }

    /// The puzzle being played.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The player's current placement.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Put `word` into `zone`.
    pub fn place(&mut self, word: &str, zone: ThemeSet) -> Result<(), PlacementViolation> {
        let target = self
            .puzzle
            .zone_for(zone)
            .ok_or(PlacementViolation::NoSuchZone(zone))?;
        if !self.puzzle.vocabulary().iter().any(|w| w == word) {
            return Err(PlacementViolation::NoSuchWord(word.to_owned()));
        }
        if let Some(occupied) = self.placement.zone_of(word) {
            return Err(PlacementViolation::WordAlreadyPlaced {
                word: word.to_owned(),
                zone: occupied,
            });
        }
        if self.placement.words_in(zone).len() >= target.capacity() {
            return Err(PlacementViolation::ZoneFull(zone));
        }
        self.placement.push(zone, word.to_owned());
        Ok(())
    }

    /// Take `word` back out of `zone`. A word that is not there is a no-op.
    pub fn unplace(&mut self, word: &str, zone: ThemeSet) {
        self.placement.remove(zone, word);
    }

    /// Move `word` from one zone to another as a single step, so the word is
    /// never unplaced or doubly placed in between. On failure it stays put.
    pub fn move_word(
        &mut self,
        word: &str,
        from: ThemeSet,
        to: ThemeSet,
    ) -> Result<(), PlacementViolation> {
        let target = self
            .puzzle
            .zone_for(to)
            .ok_or(PlacementViolation::NoSuchZone(to))?;
        if !self.placement.words_in(from).iter().any(|w| w == word) {
            return Err(PlacementViolation::WordNotInZone {
                word: word.to_owned(),
                zone: from,
            });
        }
        if from == to {
            return Ok(());
        }
        if self.placement.words_in(to).len() >= target.capacity() {
            return Err(PlacementViolation::ZoneFull(to));
        }
        self.placement.remove(from, word);
        self.placement.push(to, word.to_owned());
        Ok(())
    }

    /// Vocabulary words not placed anywhere yet, in word-bank order.
    pub fn bank(&self) -> Vec<&str> {
        self.puzzle
            .vocabulary()
            .iter()
            .filter(|word| self.placement.zone_of(word).is_none())
            .map(String::as_str)
            .collect()
    }

    /// Whether every slot on the board is filled. Hosts usually check the
    /// solution as soon as this turns true.
    pub fn is_full(&self) -> bool {
        self.placement.total_words() == self.puzzle.total_capacity()
    }

    /// Judge the current placement. An incomplete board is simply not correct.
    pub fn check_solution(&self) -> bool {
        self.solved_relabeling().is_some()
    }

    /// Like [`check_solution`](Board::check_solution), but hands back the
    /// discovered relabeling so the host can reveal which anonymous theme is
    /// really which.
    pub fn solved_relabeling(&self) -> Option<Relabeling> {
        verifier::matching_relabeling(&self.puzzle, &self.placement)
    }

    /// The canonical solution, for a host-side "show solution" control.
    ///
    /// Reading it changes nothing on the board and is never a win; whether to
    /// copy it over the player's placement is the host's decision.
    pub fn reveal_solution(&self) -> &Placement {
        self.puzzle.solution()
    }

    /// Clear every placement, returning all words to the bank.
    pub fn reset(&mut self) {
        self.placement.clear();
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for zone in self.puzzle.zones() {
            let words = self.placement.words_in(zone.themes());
            match words.is_empty() {
                true => writeln!(f, "{}:", zone.themes())?,
                false => writeln!(f, "{}: {}", zone.themes(), words.join(", "))?,
            }
        }
        let bank = self.bank();
        match bank.is_empty() {
            true => write!(f, "bank:"),
            false => write!(f, "bank: {}", bank.join(", ")),
        }
    }
}
