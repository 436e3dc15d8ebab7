// src/format/mod.rs

pub mod number;
pub mod render;
pub mod superscript;

// Re-export main types for convenience
pub use number::format_general;
pub use render::{render, RenderOptions};
pub use superscript::superscript;
