use std::collections::BTreeMap;

use crate::theme::ThemeSet;

/// A snapshot of where words currently sit: zone key to words, in no
/// particular order within a zone. Zones without an entry read as empty, so
/// a fresh `Placement` is an entirely unplaced board.
///
/// `Placement` is plain data. The mutation rules of the game (capacities, no
/// double placement) are enforced by [`Board`](crate::Board), which owns the
/// live placement; verification only ever reads one of these.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Placement {
    pub(crate) zones: BTreeMap<ThemeSet, Vec<String>>,
}

impl Placement {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Words currently in `zone`. Absent zones read as empty.
    pub fn words_in(&self, zone: ThemeSet) -> &[String] {
        self.zones.get(&zone).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of placed words across all zones.
    pub fn total_words(&self) -> usize {
        self.zones.values().map(Vec::len).sum()
    }

    /// The zone currently holding `word`, if any.
    pub fn zone_of(&self, word: &str) -> Option<ThemeSet> {
        self.zones
            .iter()
            .find(|(_, words)| words.iter().any(|w| w == word))
            .map(|(zone, _)| *zone)
    }

    /// Iterate `(zone, words)` pairs in key order, skipping untouched zones.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeSet, &[String])> + '_ {
        self.zones
            .iter()
            .map(|(zone, words)| (*zone, words.as_slice()))
    }

    pub(crate) fn push(&mut self, zone: ThemeSet, word: String) {
        self.zones.entry(zone).or_default().push(word);
    }

    pub(crate) fn remove(&mut self, zone: ThemeSet, word: &str) -> bool {
        match self.zones.get_mut(&zone) {
            Some(words) => match words.iter().position(|w| w == word) {
                Some(at) => {
                    words.remove(at);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.zones.clear();
    }
}
