//! Monthly payment ("renta mensual de 600 euros", "monthly payments of $600").

use crate::{money, patterns};
use contract_types::Lang;

pub fn extract(text: &str, lang: Lang) -> Option<String> {
    for re in patterns::monthly(lang) {
        for cap in re.captures_iter(text) {
            let m = match cap.get(1) {
                Some(m) => m,
                None => continue,
            };
            let parsed = match money::parse_amount(m.as_str()) {
                Some(p) => p,
                None => continue,
            };
            let currency =
                money::resolve_currency(text, m.start(), m.end(), cap.get(2).map(|c| c.as_str()));
            return Some(money::render(&parsed, &currency));
        }
    }
    None
}
