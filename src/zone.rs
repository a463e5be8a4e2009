use crate::theme::ThemeSet;

/// One region of the board: a non-empty subset of themes plus the number of
/// word slots it holds. Both are fixed when the puzzle loads.
///
/// A puzzle's zone list is curated data and need not cover every subset of
/// themes; asking [`Puzzle::zone_for`](crate::Puzzle::zone_for) about an
/// unused subset is legal and answers `None`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Zone {
    pub(crate) themes: ThemeSet,
    pub(crate) capacity: usize,
}

impl Zone {
    /// The theme subset this zone stands for; its `Display` form is the zone key.
    pub fn themes(&self) -> ThemeSet {
        self.themes
    }

    /// Number of word slots in this zone.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
