// error module
pub mod error;
// loader module
mod loader;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the loader module.
//─────────────────────────────────────────────────────────────────────────────
pub use loader::load_edges_from_file;
