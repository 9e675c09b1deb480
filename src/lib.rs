use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use config::{PassPolicy, Rules};
pub use error::{IllegalMove, ProtocolViolation};
pub use game::OthelloGame;
pub use types::{Cell, Owner, Tile, Turn};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
