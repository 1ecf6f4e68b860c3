//! LLM validation — pluggable, trait-based evidence extraction per criterion.
//!
//! `AppState` holds an `Arc<dyn EvidenceExtractor>`, so tests inject canned
//! extractors and a different provider can be swapped in without touching
//! the engine. All eight criteria are queried concurrently, bounded by a
//! semaphore and a per-criterion timeout. A criterion whose call fails is
//! reported as empty AND listed as unavailable — "the model found nothing"
//! and "the model could not be asked" are different answers.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::warn;

use crate::assessment::criteria::CriterionKey;
use crate::assessment::prompts;
use crate::llm_client::{LlmClient, LlmError};

/// The evidence-extraction capability: given CV text and a criterion,
/// produce the ordered evidence snippets or fail. Any provider (hosted
/// model, local model, test fake) satisfies this.
#[async_trait]
pub trait EvidenceExtractor: Send + Sync {
    async fn extract_evidence(
        &self,
        criterion: CriterionKey,
        cv_text: &str,
    ) -> Result<Vec<String>, LlmError>;
}

/// Expected response shape from the model.
#[derive(Debug, Deserialize)]
struct EvidenceResponse {
    snippets: Vec<String>,
}

/// Production extractor backed by the external LLM endpoint.
pub struct LlmEvidenceExtractor {
    llm: LlmClient,
}

impl LlmEvidenceExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl EvidenceExtractor for LlmEvidenceExtractor {
    async fn extract_evidence(
        &self,
        criterion: CriterionKey,
        cv_text: &str,
    ) -> Result<Vec<String>, LlmError> {
        let prompt = prompts::build_evidence_prompt(criterion, cv_text);
        let response: EvidenceResponse = self
            .llm
            .call_json(&prompt, prompts::EVIDENCE_SYSTEM)
            .await?;
        Ok(response.snippets)
    }
}

/// Per-request bounds on the LLM fan-out.
#[derive(Debug, Clone)]
pub struct ValidatorOptions {
    /// Budget for a single criterion's extraction call.
    pub timeout: Duration,
    /// Maximum criteria queried at once against the shared endpoint.
    pub max_concurrency: usize,
}

/// Result of validating one CV across all eight criteria.
#[derive(Debug)]
pub struct LlmScan {
    /// Always keyed by exactly the eight criteria; empty list = no evidence.
    pub matches: BTreeMap<CriterionKey, Vec<String>>,
    /// Criteria whose extraction call failed or timed out, sorted.
    pub unavailable: Vec<CriterionKey>,
}

/// Queries the extractor for every criterion concurrently. Partial failures
/// degrade to empty-and-unavailable for the affected criterion only; this
/// function itself never fails.
pub async fn validate(
    extractor: Arc<dyn EvidenceExtractor>,
    cv_text: &str,
    options: &ValidatorOptions,
) -> LlmScan {
    let text: Arc<str> = Arc::from(cv_text);
    let semaphore = Arc::new(Semaphore::new(options.max_concurrency.max(1)));
    let per_criterion_timeout = options.timeout;

    let mut tasks = JoinSet::new();
    for criterion in CriterionKey::ALL {
        let extractor = Arc::clone(&extractor);
        let text = Arc::clone(&text);
        let semaphore = Arc::clone(&semaphore);

        tasks.spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .expect("validator semaphore closed");
            let outcome = match timeout(
                per_criterion_timeout,
                extractor.extract_evidence(criterion, &text),
            )
            .await
            {
                Ok(result) => result,
                Err(_) => Err(LlmError::Timeout(per_criterion_timeout)),
            };
            (criterion, outcome)
        });
    }

    let mut matches: BTreeMap<CriterionKey, Vec<String>> = BTreeMap::new();
    let mut unavailable: Vec<CriterionKey> = Vec::new();

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((criterion, Ok(snippets))) => {
                matches.insert(criterion, snippets);
            }
            Ok((criterion, Err(error))) => {
                warn!("LLM validation unavailable for '{criterion}': {error}");
                matches.insert(criterion, Vec::new());
                unavailable.push(criterion);
            }
            Err(join_error) => {
                // Criterion filled in below from the missing-key sweep.
                warn!("LLM validation task failed to complete: {join_error}");
            }
        }
    }

    for criterion in CriterionKey::ALL {
        matches.entry(criterion).or_insert_with(|| {
            unavailable.push(criterion);
            Vec::new()
        });
    }

    unavailable.sort();
    unavailable.dedup();

    LlmScan {
        matches,
        unavailable,
    }
}
