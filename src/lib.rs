use wasm_bindgen::prelude::*;

pub mod api;
pub mod dice;
pub mod game;
pub mod path;
pub mod types;

pub use api::LudoGame;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
