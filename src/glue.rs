//! Location of the Emscripten-generated glue script this app boots.
//!
//! The glue file and its `.wasm` sibling are served next to the app; their
//! location is fixed apart from a base path injected at build time.

/// File name of the generated glue script, fixed by the demo's build.
pub const GLUE_FILE: &str = "cube.js";

/// Base path injected at build time (`PUBLIC_URL`), empty when unset.
pub fn base_path() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

/// Full source location of the glue script for a given base path.
///
/// The base is concatenated verbatim; no separator normalization happens, so a
/// trailing slash on `base` yields a double slash (browsers tolerate it).
pub fn glue_src(base: &str) -> String {
    format!("{base}/{GLUE_FILE}")
}
