//! Document text acquisition: PDF byte streams in, normalized plain text
//! and a language tag out.

pub mod extract;
pub mod lang;

pub use extract::{extract_text, TextError};
pub use lang::detect_language;
