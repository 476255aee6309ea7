//! Free-text "object of the contract" summary, anchored on headings like
//! "OBJETO DEL CONTRATO" / "SUBJECT MATTER".

use super::{capitalize, collapse_ws};
use crate::patterns;
use contract_types::Lang;

const MAX_LEN: usize = 150;

pub fn extract(text: &str, lang: Lang) -> Option<String> {
    for re in patterns::object(lang) {
        let cap = match re.captures(text) {
            Some(c) => c,
            None => continue,
        };
        let m = match cap.get(1) {
            Some(m) => m,
            None => continue,
        };

        let mut summary = collapse_ws(m.as_str());
        if summary.chars().count() > MAX_LEN {
            summary = summary.chars().take(MAX_LEN).collect::<String>() + "...";
        }

        let lower = summary.to_lowercase();
        if matches!(lower.as_str(), "la" | "el" | "the") || summary.chars().count() <= 5 {
            continue;
        }
        return Some(capitalize(&summary));
    }
    None
}
