//! Contract type classification.
//!
//! The narrow projected-property pre-sale patterns run before the generic
//! catalog so the specific category is never shadowed by a broader one.
//! The human-readable label is a title-cased rendering of the matched span;
//! branch logic downstream dispatches on the closed [`ContractBranch`]
//! derived here, never on the label text.

use crate::patterns;
use contract_types::{ContractBranch, Lang};

const LEASE_KEYWORDS: &[&str] = &["arrendamiento", "alquiler", "lease", "rental"];
const SALE_KEYWORDS: &[&str] = &["compraventa", "compra", "venta", "sale", "purchase"];

pub fn classify(text: &str, lang: Lang) -> (String, ContractBranch) {
    // Narrow pre-sale categories, checked in both languages
    if patterns::NARROW_PRESALE_ES.is_match(text) {
        return (
            "Contrato De Compraventa De Finca Proyectada".to_string(),
            ContractBranch::Sale,
        );
    }
    if patterns::NARROW_PRESALE_EN.is_match(text) {
        return (
            "Off-Plan Property Purchase Agreement".to_string(),
            ContractBranch::Sale,
        );
    }

    for re in patterns::contract_types(lang) {
        if let Some(m) = re.find(text) {
            let label = title_case(m.as_str().trim());
            let branch = derive_branch(&label);
            return (label, branch);
        }
    }

    let unknown = match lang {
        Lang::Es => "Desconocido",
        Lang::En => "Unknown",
    };
    (unknown.to_string(), ContractBranch::Unknown)
}

/// Keyword membership on the lowercased label. Kept separate from display
/// so wording drift in the label never silently changes the branch rules.
pub fn derive_branch(label: &str) -> ContractBranch {
    let lower = label.to_lowercase();
    if lower == "desconocido" || lower == "unknown" {
        return ContractBranch::Unknown;
    }
    if LEASE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return ContractBranch::Lease;
    }
    if SALE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return ContractBranch::Sale;
    }
    ContractBranch::Other
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn narrow_presale_beats_generic_sales_contract() {
        let text = "Se firma este contrato de compraventa de la vivienda proyectada \
                    en la promoción Los Olivos.";
        let (label, branch) = classify(text, Lang::Es);
        assert_eq!(label, "Contrato De Compraventa De Finca Proyectada");
        assert_eq!(branch, ContractBranch::Sale);
    }

    #[test]
    fn english_off_plan_variant() {
        let text = "This off-plan property purchase agreement is made between the parties.";
        let (label, branch) = classify(text, Lang::En);
        assert_eq!(label, "Off-Plan Property Purchase Agreement");
        assert_eq!(branch, ContractBranch::Sale);
    }

    #[test]
    fn generic_label_is_title_cased() {
        let (label, branch) = classify("CONTRATO DE ARRENDAMIENTO de vivienda", Lang::Es);
        assert_eq!(label, "Contrato De Arrendamiento");
        assert_eq!(branch, ContractBranch::Lease);
    }

    #[test]
    fn first_catalog_match_wins() {
        let (label, branch) = classify("lease agreement and also a sales contract", Lang::En);
        // "lease agreement" precedes "sales contract" in the catalog
        assert_eq!(label, "Lease Agreement");
        assert_eq!(branch, ContractBranch::Lease);
    }

    #[test]
    fn unmatched_text_is_unknown() {
        let (label, branch) = classify("una carta cualquiera", Lang::Es);
        assert_eq!(label, "Desconocido");
        assert_eq!(branch, ContractBranch::Unknown);

        let (label, branch) = classify("some unrelated letter", Lang::En);
        assert_eq!(label, "Unknown");
        assert_eq!(branch, ContractBranch::Unknown);
    }

    #[test]
    fn branch_derivation_from_labels() {
        assert_eq!(derive_branch("Contrato De Compraventa"), ContractBranch::Sale);
        assert_eq!(derive_branch("Rental Agreement"), ContractBranch::Lease);
        assert_eq!(derive_branch("Contrato De Servicios"), ContractBranch::Other);
        assert_eq!(derive_branch("Employment Agreement"), ContractBranch::Other);
        assert_eq!(derive_branch("Unknown"), ContractBranch::Unknown);
    }
}
