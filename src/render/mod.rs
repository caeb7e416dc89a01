//! Rendering module for converting analysis results to output formats.

mod json;
mod text;

pub use json::{summary_to_json, to_json, JsonFormat};
pub use text::to_text;
