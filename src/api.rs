use wasm_bindgen::prelude::*;

use crate::dice::RandomDie;
use crate::game::{GameError, GameInstance};
use crate::types::Player;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(Into::into)
}

fn err_js(err: GameError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS-facing handle around one game. The presentation layer renders the
/// snapshots and forwards validated clicks as `apply_move` calls.
#[wasm_bindgen]
pub struct LudoGame {
    inner: GameInstance,
}

#[wasm_bindgen]
impl LudoGame {
    /// Fresh game on the standard board with an OS-seeded die.
    #[wasm_bindgen(constructor)]
    pub fn new() -> LudoGame {
        LudoGame {
            inner: GameInstance::new(Box::new(RandomDie::new())),
        }
    }

    /// Full state snapshot for rendering.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.to_game_state())
    }

    /// Rolls the die for the current player. Returns a `RollReport`;
    /// throws on a finished game or an unconsumed previous roll.
    pub fn roll(&mut self) -> Result<JsValue, JsValue> {
        let report = self.inner.roll().map_err(err_js)?;
        to_js(&report)
    }

    /// Moves the chosen token of the current player. Returns a
    /// `MoveReport`; throws without mutating on an illegal choice.
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, slot: usize) -> Result<JsValue, JsValue> {
        let report = self.inner.apply_move(slot).map_err(err_js)?;
        to_js(&report)
    }

    /// Input filtering: whether the slot may move on the pending roll.
    #[wasm_bindgen(js_name = isLegal)]
    pub fn is_legal(&self, slot: usize) -> bool {
        self.inner.is_legal(slot)
    }

    /// Render coordinate of one token (`player` is 1 or 2), or
    /// `null`/`undefined` while the token sits in its base.
    #[wasm_bindgen(js_name = tokenCell)]
    pub fn token_cell(&self, player: u8, slot: usize) -> Result<JsValue, JsValue> {
        let player = Player::from_number(player)
            .ok_or_else(|| JsValue::from_str("player must be 1 or 2"))?;
        to_js(&self.inner.token_cell(player, slot))
    }
}

impl Default for LudoGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    #[wasm_bindgen_test]
    fn snapshot_is_serializable() {
        let game = LudoGame::new();
        let state = game.state().unwrap();
        assert!(!state.is_null());
    }

    #[wasm_bindgen_test]
    fn roll_reports_cross_the_boundary() {
        let mut game = LudoGame::new();
        let report = game.roll().unwrap();
        assert!(!report.is_null());
    }
}
