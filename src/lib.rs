#![warn(missing_docs)]

//! # `venndrop`
//!
//! Verification engine for "hidden themes" word-sorting puzzles: N anonymous
//! themes partition a small vocabulary, and the player drops every word into
//! a zone standing for a subset of themes ("theme 1 only", "themes 2 and 3",
//! "all of them"). Because the themes are anonymous until revealed, any
//! permutation of the theme labels that reproduces the same subset structure
//! is an equally valid solution, so the engine judges placements correct *up
//! to relabeling of themes* rather than against one literal answer key.
//!
//! Load a puzzle from a JSON document with [`PuzzleDocument::from_json`] or
//! assemble one with [`PuzzleBuilder`](builder::PuzzleBuilder); both validate
//! the configuration and fail closed. Then drive a [`Board`] with the
//! player's moves and ask [`check_solution`](Board::check_solution) once
//! [`is_full`](Board::is_full) turns true; incomplete boards are never
//! judged correct.
//!
//! # Internals
//!
//! Verification enumerates all N! relabelings of the theme labels, remaps the
//! canonical solution through each, and compares every zone's words as sets.
//! Nothing hard-codes N: the same search serves the 7-zone three-theme Venn
//! board, the 9-zone four-theme grid, and anything else a document describes.
//! For the observed boards (N ≤ 4, at most 9 zones) the search is at most
//! 24 × 9 set comparisons, well under a millisecond, and a completeness gate
//! skips it entirely while words remain in the bank.

pub use board::{Board, PlacementViolation};
pub use builder::PuzzleBuilder;
pub use document::{PuzzleDocument, ZoneEntry};
pub use placement::Placement;
pub use puzzle::{ConfigurationError, Puzzle};
pub use theme::{ThemeId, ThemeSet};
pub use verifier::{matching_relabeling, Relabeling};
pub use zone::Zone;

pub(crate) mod board;
pub mod builder;
pub(crate) mod document;
pub(crate) mod placement;
pub(crate) mod puzzle;
pub(crate) mod theme;
pub(crate) mod verifier;
#[cfg(feature = "wasm")]
pub mod wasm;
pub(crate) mod zone;
