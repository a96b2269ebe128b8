// src/model/mod.rs
// Declares the modules within the model directory.
pub mod pypi;
pub mod release;

// Re-export
pub use pypi::{PypiFile, PypiProject};
pub use release::Release;
