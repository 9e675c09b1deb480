use wasm_bindgen::prelude::*;

use crate::config::Rules;
use crate::game::OthelloGame;
use crate::types::{Cell, Placement};

/// JS handle to a single game session.
#[wasm_bindgen]
pub struct WasmGame {
    inner: OthelloGame,
}

#[wasm_bindgen]
impl WasmGame {
    /// `rules` may be `undefined`/`null` for the defaults, or `{ passPolicy }`.
    #[wasm_bindgen(constructor)]
    pub fn new(rules: JsValue) -> Result<WasmGame, JsError> {
        let rules: Rules = if rules.is_undefined() || rules.is_null() {
            Rules::default()
        } else {
            serde_wasm_bindgen::from_value(rules)?
        };
        Ok(Self {
            inner: OthelloGame::with_rules(rules),
        })
    }

    /// Returns the occupied cells as `[{ row, col, owner }]`.
    #[wasm_bindgen(js_name = startGame)]
    pub fn start_game(&mut self) -> Result<JsValue, JsError> {
        let mut layout: Vec<Placement> = self
            .inner
            .start_new_game()
            .into_iter()
            .map(|(cell, owner)| Placement {
                row: cell.row,
                col: cell.col,
                owner,
            })
            .collect();
        layout.sort_by_key(|p| (p.row, p.col));
        Ok(serde_wasm_bindgen::to_value(&layout)?)
    }

    /// Throws with a readable reason when the move is illegal.
    #[wasm_bindgen(js_name = playerMove)]
    pub fn player_move(&mut self, row: u8, col: u8) -> Result<JsValue, JsError> {
        let changed = self.inner.apply_player_move(Cell::new(row, col))?;
        Ok(serde_wasm_bindgen::to_value(&changed)?)
    }

    /// Returns the changed cells, or `null` when the computer had no move.
    #[wasm_bindgen(js_name = computerMove)]
    pub fn computer_move(&mut self) -> Result<JsValue, JsError> {
        let changed = self.inner.compute_computer_move()?;
        Ok(serde_wasm_bindgen::to_value(&changed)?)
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_state())?)
    }

    pub fn result(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_result())?)
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.legal_moves())?)
    }
}
