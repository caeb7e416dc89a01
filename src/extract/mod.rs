//! Text-level extraction over the concatenated document text.

mod entities;
mod keywords;

pub use entities::extract_entities;
pub use keywords::{is_stop_word, rank_keywords, DEFAULT_KEYWORD_LIMIT};
