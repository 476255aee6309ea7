pub mod types;

pub use types::{compliance_label, AnalysisResult, ContractBranch, Lang, Recommendation};
