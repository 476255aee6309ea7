//! Contract duration ("por un período de 12 meses", "for a period of 3 years").

use crate::patterns;
use contract_types::Lang;

pub fn extract(text: &str, lang: Lang) -> Option<String> {
    for re in patterns::duration(lang) {
        if let Some(cap) = re.captures(text) {
            if let Some(m) = cap.get(1) {
                return Some(m.as_str().trim().to_string());
            }
        }
    }
    None
}
