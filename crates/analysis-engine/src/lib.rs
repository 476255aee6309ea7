//! Rule-based contract analysis pipeline.
//!
//! Takes free-form contract text (Spanish or English) and produces a
//! structured summary: category, duration, monetary terms, deposit, sale
//! object, compliance flag and a signable/needs-review recommendation.
//! Every stage is a pure function of the input text; the only shared state
//! is the read-only pattern tables.

pub mod classifier;
pub mod compliance;
pub mod decision;
pub mod extractors;
pub mod money;
pub mod patterns;

use contract_types::{AnalysisResult, ContractBranch, Lang};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("document text is empty")]
    EmptyDocument,
}

#[derive(Debug, Error)]
pub enum InitError {
    #[error("pattern tables failed to load")]
    NoPatternTables,
}

/// Capability witness: holding one proves the pattern tables compiled.
/// Obtained once at startup via [`initialize`] and injected into the
/// analyzer instead of being read as ambient global state.
pub struct ServicesReady(());

/// One-time service initialization. Compiles every pattern table so a
/// malformed pattern aborts startup instead of a request.
pub fn initialize() -> Result<ServicesReady, InitError> {
    if patterns::warm() == 0 {
        return Err(InitError::NoPatternTables);
    }
    Ok(ServicesReady(()))
}

pub struct ContractAnalyzer {
    _ready: ServicesReady,
}

impl ContractAnalyzer {
    pub fn new(ready: ServicesReady) -> Self {
        Self { _ready: ready }
    }

    /// Runs the full pipeline over one document.
    ///
    /// Individual extractors finding nothing is the expected outcome for
    /// many fields; only empty input is an error.
    pub fn analyze(
        &self,
        text: &str,
        lang: Lang,
        filename: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyDocument);
        }

        let (contract_type, branch) = classifier::classify(text, lang);

        let duration = extractors::duration::extract(text, lang);
        let amount = extractors::amount::extract(text);
        let monthly = extractors::monthly::extract(text, lang);
        let deposit = extractors::deposit::extract(text, lang, branch);
        let sale_item = extractors::sale_item::extract(text, lang, branch);
        let object = extractors::object::extract(text, lang);
        let compliance = compliance::detect(text, lang);

        let recommendation = decision::decide(
            branch,
            compliance,
            duration.as_deref(),
            amount.as_deref(),
            monthly.as_deref(),
            deposit.as_deref(),
            sale_item.as_deref(),
        );

        // Category-gated visibility: a lease reports the aggregate amount
        // only when no monthly payment was found, and a sale never reports
        // a monthly payment.
        let (amount, monthly) = match branch {
            ContractBranch::Lease if monthly.is_some() => (None, monthly),
            ContractBranch::Lease => (amount, None),
            ContractBranch::Sale => (amount, None),
            ContractBranch::Other | ContractBranch::Unknown => (amount, monthly),
        };

        Ok(AnalysisResult {
            filename: filename.to_string(),
            language: lang,
            contract_type,
            branch,
            duration,
            amount,
            monthly_payment: monthly,
            deposit,
            sale_item,
            object,
            compliance,
            recommendation,
        })
    }
}
