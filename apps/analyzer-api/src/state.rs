//! Application state for the Contract Analyzer API

use analysis_engine::ContractAnalyzer;

pub struct AppState {
    /// None when pattern initialization failed at boot; requests are
    /// answered with 503 until the process is restarted with fixed tables.
    pub analyzer: Option<ContractAnalyzer>,
}

impl AppState {
    pub fn new() -> Self {
        let analyzer = match analysis_engine::initialize() {
            Ok(ready) => {
                tracing::info!("Pattern tables loaded");
                Some(ContractAnalyzer::new(ready))
            }
            Err(e) => {
                tracing::error!("Analyzer initialization failed: {}", e);
                None
            }
        };
        Self { analyzer }
    }
}
