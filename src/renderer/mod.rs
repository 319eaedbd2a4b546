//! Canvas2D rendering module
//!
//! `palette` is plain data and math; `canvas` draws a `GameState` snapshot
//! onto a 2D context and only exists on wasm.

pub mod palette;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
