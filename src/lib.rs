//! Browser-hosted shell for the WASM graphics playground.
//!
//! This crate is intentionally a stub by default so native builds work without
//! requiring wasm toolchains. Enable the real app with: `--features web` (and a
//! wasm32 target).
//!
//! The app itself renders a static page fragment and loads the Emscripten glue
//! script (`cube.js`) that boots the graphics demo against the page's canvas.

pub mod glue;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::{start, App, ScriptHandle};
