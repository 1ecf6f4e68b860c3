use std::sync::Arc;

use crate::assessment::rules::RuleSet;
use crate::assessment::validator::EvidenceExtractor;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. Per-request data (match sets, ratings) is independently
/// allocated, so no cross-request locking exists here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Compiled criterion pattern table, validated at startup.
    pub rules: Arc<RuleSet>,
    /// Pluggable evidence extractor. Production: `LlmEvidenceExtractor`;
    /// tests swap in canned fakes.
    pub extractor: Arc<dyn EvidenceExtractor>,
}
