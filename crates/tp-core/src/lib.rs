//! tp-core: Core maze logic for the Tapoo maze runner
//!
//! This crate turns a game level and a display bound into a perfect maze
//! rendered as a grid of wall glyphs. It performs no I/O: persistence,
//! networking and input handling live in the callers.

pub mod maze;
pub mod scoring;

mod consts;
mod rng;

pub use consts::*;
pub use rng::GameRng;
