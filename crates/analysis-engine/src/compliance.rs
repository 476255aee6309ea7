//! Data-protection compliance detection.
//!
//! A document passes if it names the regulation outright, or if it carries
//! a statutory-interest restitution clause, which in practice co-occurs
//! with paraphrased compliance language.

use crate::patterns;
use contract_types::Lang;

pub fn detect(text: &str, lang: Lang) -> bool {
    if patterns::compliance(lang).iter().any(|re| re.is_match(text)) {
        return true;
    }
    patterns::interest_return(lang).is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_keyword_phrases() {
        assert!(detect("Este contrato cumple con el RGPD.", Lang::Es));
        assert!(detect("en cumplimiento del RGPD", Lang::Es));
        assert!(detect(
            "conforme al reglamento general de protección de datos",
            Lang::Es
        ));
    }

    #[test]
    fn english_keyword_phrases() {
        assert!(detect("This agreement is GDPR compliant.", Lang::En));
        assert!(detect("complies with the GDPR", Lang::En));
        assert!(detect(
            "pursuant to the General Data Protection Regulation",
            Lang::En
        ));
    }

    #[test]
    fn restitution_heuristic_widens_the_check() {
        assert!(detect(
            "con los intereses legales que correspondan, el vendedor devolverá las cantidades entregadas",
            Lang::Es
        ));
        assert!(detect(
            "together with statutory interest, the seller shall reimburse all amounts paid",
            Lang::En
        ));
    }

    #[test]
    fn unrelated_text_is_not_compliant() {
        assert!(!detect("contrato de compraventa de un vehículo", Lang::Es));
        assert!(!detect("plain sales contract with no data clauses", Lang::En));
    }

    #[test]
    fn keywords_are_language_specific() {
        // English phrasing is not recognized by the Spanish table
        assert!(!detect("This agreement is GDPR compliant.", Lang::Es));
    }
}
