use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::debug;

use crate::placement::Placement;
use crate::puzzle::Puzzle;
use crate::theme::{ThemeId, ThemeSet};

/// A bijection on theme ids: the way the player's arrangement of the
/// anonymous themes lines up with the canonical solution's numbering.
///
/// Verification hands one back on success so the host can reveal which
/// on-screen theme is really which (`image_of`), e.g. "your theme 1 is
/// Drinkable".
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Relabeling {
    // map[t - 1] is the image of theme t
    map: Vec<ThemeId>,
}

impl Relabeling {
    pub(crate) fn new(map: Vec<ThemeId>) -> Self {
        Self { map }
    }

    /// The identity relabeling on `theme_count` themes.
    pub fn identity(theme_count: ThemeId) -> Self {
        Self {
            map: (1..=theme_count).collect(),
        }
    }

    /// Where `theme` ends up under this relabeling.
    pub fn image_of(&self, theme: ThemeId) -> ThemeId {
        self.map[theme as usize - 1]
    }

    /// Apply member-wise to a zone key. The image is canonical again; the
    /// full-theme set is a fixed point of every relabeling.
    pub fn apply(&self, themes: ThemeSet) -> ThemeSet {
        themes.iter().map(|theme| self.image_of(theme)).collect()
    }

    /// True when every theme maps to itself.
    pub fn is_identity(&self) -> bool {
        self.map
            .iter()
            .enumerate()
            .all(|(at, theme)| *theme == at as ThemeId + 1)
    }
}

impl Display for Relabeling {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (at, image) in self.map.iter().enumerate() {
            if at > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}->{}", at + 1, image)?;
        }
        write!(f, ")")
    }
}

/// All N! relabelings of `1..=theme_count`, in lexicographic order.
///
/// This is the one permutation generator in the crate; nothing hard-codes a
/// particular N.
pub(crate) fn relabelings(theme_count: ThemeId) -> impl Iterator<Item = Relabeling> {
    (1..=theme_count)
        .permutations(theme_count as usize)
        .map(Relabeling::new)
}

/// Decide whether `placement` matches the puzzle's solution under some
/// relabeling of the anonymous themes, returning the first relabeling that
/// fits.
///
/// An incomplete board never matches: unless the number of placed words
/// equals the puzzle's total capacity, the permutation search is skipped
/// entirely. Relabelings are tried in lexicographic order, so the outcome is
/// deterministic for a given snapshot. Pure function of its inputs; calling
/// it twice on the same snapshot gives the same answer twice.
pub fn matching_relabeling(puzzle: &Puzzle, placement: &Placement) -> Option<Relabeling> {
    if placement.total_words() != puzzle.total_capacity() {
        return None;
    }

    let found = relabelings(puzzle.theme_count())
        .find(|relabeling| matches_under(puzzle, placement, relabeling));
    if let Some(relabeling) = &found {
        debug!("placement matches the solution under relabeling {relabeling}");
    }
    found
}

/// Compare `placement` against the solution with `relabeling` applied to
/// every solution zone.
///
/// The comparison walks the puzzle's own zone list, with absent entries on
/// either side reading as empty, which keeps it total even on curated
/// layouts that are not closed under relabeling: remapped keys outside the
/// layout are never consulted. A placement confined to layout zones (all a
/// [`Board`](crate::Board) can produce) cannot exploit that, since the words
/// such a relabeling strands outside the layout would have to occupy some
/// in-layout zone the remapped solution expects empty.
fn matches_under(puzzle: &Puzzle, placement: &Placement, relabeling: &Relabeling) -> bool {
    let mut remapped: BTreeMap<ThemeSet, &[String]> = BTreeMap::new();
    for (zone, words) in puzzle.solution().iter() {
        remapped.insert(relabeling.apply(zone), words);
    }

    puzzle.zones().iter().all(|zone| {
        let expected = remapped.get(&zone.themes()).copied().unwrap_or(&[]);
        words_match(placement.words_in(zone.themes()), expected)
    })
}

// Word order within a zone is never significant, and no zone holds the same
// word twice, so cardinality plus sorted equality is multiset equality. One
// code path for every capacity; a capacity-1 zone degenerates to string
// equality through the same comparison.
fn words_match(placed: &[String], expected: &[String]) -> bool {
    if placed.len() != expected.len() {
        return false;
    }
    let mut placed: Vec<&str> = placed.iter().map(String::as_str).collect();
    let mut expected: Vec<&str> = expected.iter().map(String::as_str).collect();
    placed.sort_unstable();
    expected.sort_unstable();
    placed == expected
}
