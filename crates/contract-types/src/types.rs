use serde::{Deserialize, Serialize};

/// Languages the analyzer understands. Picked once per document and
/// immutable for the rest of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Spanish (the deployment default when detection is inconclusive)
    #[default]
    Es,
    /// English
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }
}

/// Closed classification branch derived from the human-readable contract
/// label at classification time. All gating and decision logic dispatches
/// on this enum, never on the label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractBranch {
    Sale,
    Lease,
    Other,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Signable,
    NeedsReview,
}

impl Recommendation {
    /// Display string shown to the end user, in the document's language.
    pub fn label(self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Recommendation::Signable, Lang::Es) => "✔ Apto para firma",
            (Recommendation::Signable, Lang::En) => "✔ Suitable for signing",
            (Recommendation::NeedsReview, Lang::Es) => "⚠️ Revisión necesaria",
            (Recommendation::NeedsReview, Lang::En) => "⚠️ Review required",
        }
    }
}

/// Display string for the data-protection compliance flag.
pub fn compliance_label(lang: Lang, compliant: bool) -> &'static str {
    match (lang, compliant) {
        (Lang::Es, true) => "✔ Cumple con RGPD",
        (Lang::En, true) => "✔ Compliant with GDPR",
        (Lang::Es, false) => "❌ No se detectó cumplimiento",
        (Lang::En, false) => "❌ No compliance detected",
    }
}

/// Structured summary of one analyzed contract. Built once at the end of
/// the pipeline; optional fields are already gated by branch (a sale never
/// carries a monthly payment, a non-lease never carries a deposit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub filename: String,
    pub language: Lang,
    pub contract_type: String,
    pub branch: ContractBranch,
    pub duration: Option<String>,
    pub amount: Option<String>,
    pub monthly_payment: Option<String>,
    pub deposit: Option<String>,
    pub sale_item: Option<String>,
    pub object: Option<String>,
    pub compliance: bool,
    pub recommendation: Recommendation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lang_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Lang::Es).unwrap(), "\"es\"");
        assert_eq!(serde_json::to_string(&Lang::En).unwrap(), "\"en\"");
    }

    #[test]
    fn default_language_is_spanish() {
        assert_eq!(Lang::default(), Lang::Es);
    }

    #[test]
    fn recommendation_labels_follow_language() {
        assert_eq!(
            Recommendation::Signable.label(Lang::Es),
            "✔ Apto para firma"
        );
        assert_eq!(
            Recommendation::NeedsReview.label(Lang::En),
            "⚠️ Review required"
        );
    }

    #[test]
    fn compliance_labels_follow_language() {
        assert_eq!(compliance_label(Lang::Es, true), "✔ Cumple con RGPD");
        assert_eq!(compliance_label(Lang::En, false), "❌ No compliance detected");
    }
}
