//! Bindings for a JavaScript host, compiled with the `wasm` feature.
//!
//! The surface mirrors what the game frontend actually calls: load a puzzle
//! document, mutate the placement as the player clicks, ask whether the board
//! is full, judge it, reveal. Zone keys cross this boundary as strings in any
//! grammar [`parse_zone_key`](crate::builder::parse_zone_key) accepts.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::builder::parse_zone_key;
use crate::document::PuzzleDocument;
use crate::theme::ThemeSet;

/// A puzzle in play, owned by the JS host.
#[wasm_bindgen]
pub struct Game {
    board: Board,
}

#[wasm_bindgen]
impl Game {
    /// Load a JSON puzzle document and start an empty board.
    #[wasm_bindgen(constructor)]
    pub fn new(document: &str) -> Result<Game, JsError> {
        let puzzle = PuzzleDocument::from_json(document)?;
        Ok(Game {
            board: Board::new(puzzle),
        })
    }

    fn zone(&self, key: &str) -> Result<ThemeSet, JsError> {
        Ok(parse_zone_key(key, self.board.puzzle().theme_count())?)
    }

    /// Put a word into a zone.
    pub fn place(&mut self, word: &str, zone: &str) -> Result<(), JsError> {
        let zone = self.zone(zone)?;
        Ok(self.board.place(word, zone)?)
    }

    /// Take a word back out of a zone; absent words are a no-op.
    pub fn unplace(&mut self, word: &str, zone: &str) -> Result<(), JsError> {
        let zone = self.zone(zone)?;
        self.board.unplace(word, zone);
        Ok(())
    }

    /// Move a word between zones atomically.
    #[wasm_bindgen(js_name = moveWord)]
    pub fn move_word(&mut self, word: &str, from: &str, to: &str) -> Result<(), JsError> {
        let from = self.zone(from)?;
        let to = self.zone(to)?;
        Ok(self.board.move_word(word, from, to)?)
    }

    /// Words not yet placed, for the word bank.
    pub fn bank(&self) -> Array {
        self.board.bank().into_iter().map(JsValue::from).collect()
    }

    /// Whether every slot is filled; the usual moment to check the solution.
    #[wasm_bindgen(js_name = isFull)]
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Judge the current placement. Incomplete boards are never correct.
    #[wasm_bindgen(js_name = checkSolution)]
    pub fn check_solution(&self) -> bool {
        self.board.check_solution()
    }

    /// Theme display names in id order, for the reveal after a win.
    #[wasm_bindgen(js_name = themeNames)]
    pub fn theme_names(&self) -> Array {
        self.board
            .puzzle()
            .theme_names()
            .iter()
            .map(|name| JsValue::from(name.as_str()))
            .collect()
    }

    /// The canonical solution as JSON (canonical zone key to word list), for
    /// a "show solution" control. Not a win.
    #[wasm_bindgen(js_name = revealSolution)]
    pub fn reveal_solution(&self) -> String {
        let solution: serde_json::Map<String, serde_json::Value> = self
            .board
            .reveal_solution()
            .iter()
            .map(|(zone, words)| (zone.to_string(), serde_json::Value::from(words.to_vec())))
            .collect();
        serde_json::Value::Object(solution).to_string()
    }

    /// Clear the board.
    pub fn reset(&mut self) {
        self.board.reset();
    }
}
