//! Wire models for the Contract Analyzer API

use contract_types::{compliance_label, AnalysisResult};
use serde::{Deserialize, Serialize};

/// Response for the analyze endpoint. Monetary and descriptive fields are
/// omitted from the JSON when the pipeline found nothing; compliance and
/// recommendation ship as display strings in the document's language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub filename: String,
    pub language: String,
    #[serde(rename = "type")]
    pub contract_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    pub compliance: String,
    pub recommendation: String,
}

impl From<AnalysisResult> for AnalyzeResponse {
    fn from(r: AnalysisResult) -> Self {
        Self {
            filename: r.filename,
            language: r.language.code().to_string(),
            contract_type: r.contract_type,
            duration: r.duration,
            amount: r.amount,
            monthly_payment: r.monthly_payment,
            deposit: r.deposit,
            sale_item: r.sale_item,
            object: r.object,
            compliance: compliance_label(r.language, r.compliance).to_string(),
            recommendation: r.recommendation.label(r.language).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contract_types::{ContractBranch, Lang, Recommendation};

    fn sample() -> AnalysisResult {
        AnalysisResult {
            filename: "venta.pdf".to_string(),
            language: Lang::Es,
            contract_type: "Contrato De Compraventa".to_string(),
            branch: ContractBranch::Sale,
            duration: None,
            amount: Some("50.000 €".to_string()),
            monthly_payment: None,
            deposit: None,
            sale_item: Some("Vehículo marca FORD".to_string()),
            object: None,
            compliance: true,
            recommendation: Recommendation::Signable,
        }
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let json = serde_json::to_value(AnalyzeResponse::from(sample())).unwrap();
        assert!(json.get("duration").is_none());
        assert!(json.get("monthly_payment").is_none());
        assert_eq!(json["type"], "Contrato De Compraventa");
        assert_eq!(json["amount"], "50.000 €");
    }

    #[test]
    fn labels_are_rendered_in_the_document_language() {
        let resp = AnalyzeResponse::from(sample());
        assert_eq!(resp.compliance, "✔ Cumple con RGPD");
        assert_eq!(resp.recommendation, "✔ Apto para firma");
        assert_eq!(resp.language, "es");
    }
}
