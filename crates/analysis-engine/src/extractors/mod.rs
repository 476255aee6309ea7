//! Field extractors. Each is a pure function over `(text, lang[, branch])`
//! returning `Option<String>`; `None` means "not found" and is never an
//! error.

pub mod amount;
pub mod deposit;
pub mod duration;
pub mod monthly;
pub mod object;
pub mod sale_item;

/// Uppercases the first character and lowercases the rest.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

/// Collapses any whitespace run to a single space.
pub(crate) fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
