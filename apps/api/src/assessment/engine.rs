//! Hybrid assessment pipeline: normalize → {rule scan ∥ LLM validation} → combine.

use std::sync::Arc;
use tracing::debug;

use crate::assessment::models::{AssessmentResult, LlmValidatedMatches, RuleBasedMatches};
use crate::assessment::normalize::normalize;
use crate::assessment::rating::{self, Rating};
use crate::assessment::rules::{hit_count, RuleSet};
use crate::assessment::validator::{self, EvidenceExtractor, ValidatorOptions};

/// Runs one full assessment. The two signal paths have no data dependency,
/// so they run concurrently; only the LLM branch can block, and it is
/// time-bounded per criterion inside the validator. Never fails — partial
/// LLM degradation is reflected in the result, not surfaced as an error.
pub async fn run_assessment(
    raw_text: &str,
    rules: &RuleSet,
    extractor: Arc<dyn EvidenceExtractor>,
    options: &ValidatorOptions,
) -> AssessmentResult {
    let cv = normalize(raw_text);

    // Nothing to match and nothing worth asking the model about.
    if cv.is_empty() {
        return AssessmentResult {
            rule_based_matches: RuleBasedMatches::default(),
            rule_based_rating: Rating::Low,
            llm_validated_matches: LlmValidatedMatches::default(),
            llm_based_rating: Rating::Low,
            combined_rating: Rating::Low,
            llm_unavailable_criteria: Vec::new(),
        };
    }

    let (rule_matches, llm_scan) = tokio::join!(
        async { rules.scan(&cv) },
        validator::validate(extractor, &cv.text, options),
    );

    let rule_based_rating = rating::rule_rating(hit_count(&rule_matches));
    let llm_based_rating = rating::llm_rating(hit_count(&llm_scan.matches));
    let combined_rating = rating::combine(rule_based_rating, llm_based_rating);

    debug!(
        "assessment complete: rule={rule_based_rating}, llm={llm_based_rating}, \
         combined={combined_rating}, unavailable={}",
        llm_scan.unavailable.len()
    );

    AssessmentResult {
        rule_based_matches: RuleBasedMatches::from_map(rule_matches),
        rule_based_rating,
        llm_validated_matches: LlmValidatedMatches::from_map(llm_scan.matches),
        llm_based_rating,
        combined_rating,
        llm_unavailable_criteria: llm_scan.unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::criteria::CriterionKey;
    use crate::assessment::rating::Rating;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::time::Duration;

    fn options() -> ValidatorOptions {
        ValidatorOptions {
            timeout: Duration::from_secs(5),
            max_concurrency: 4,
        }
    }

    fn rules() -> RuleSet {
        RuleSet::compiled().unwrap()
    }

    /// Finds evidence for awards, judging, and high remuneration (3 of 8).
    struct ThreeHitExtractor;

    #[async_trait]
    impl EvidenceExtractor for ThreeHitExtractor {
        async fn extract_evidence(
            &self,
            criterion: CriterionKey,
            _cv_text: &str,
        ) -> Result<Vec<String>, LlmError> {
            match criterion {
                CriterionKey::Awards => Ok(vec!["Recipient of the Turing Award".to_string()]),
                CriterionKey::Judging => Ok(vec!["Program committee member".to_string()]),
                CriterionKey::HighRemuneration => {
                    Ok(vec!["Top 1% compensation for the field".to_string()])
                }
                _ => Ok(vec![]),
            }
        }
    }

    /// Finds nothing for any criterion.
    struct EmptyExtractor;

    #[async_trait]
    impl EvidenceExtractor for EmptyExtractor {
        async fn extract_evidence(
            &self,
            _criterion: CriterionKey,
            _cv_text: &str,
        ) -> Result<Vec<String>, LlmError> {
            Ok(vec![])
        }
    }

    /// Fails for every criterion.
    struct BrokenExtractor;

    #[async_trait]
    impl EvidenceExtractor for BrokenExtractor {
        async fn extract_evidence(
            &self,
            _criterion: CriterionKey,
            _cv_text: &str,
        ) -> Result<Vec<String>, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    const SAMPLE_CV: &str = "\
        Recipient of the Turing Award for distributed computing\n\
        First prize at the International Mathematical Olympiad\n\
        Rhodes Scholarship recipient, 2019\n\
        Member of the National Academy of Engineering\n";

    #[tokio::test]
    async fn test_agreement_scenario_both_medium() {
        // Rule path: awards + membership hit (2 of 5) → medium.
        // LLM path: 3 of 8 criteria hit → medium. Agreement → medium.
        let result =
            run_assessment(SAMPLE_CV, &rules(), Arc::new(ThreeHitExtractor), &options()).await;

        assert_eq!(result.rule_based_matches.awards.len(), 3);
        assert_eq!(result.rule_based_matches.membership.len(), 1);
        assert!(result.rule_based_matches.press.is_empty());
        assert_eq!(result.rule_based_rating, Rating::Medium);
        assert_eq!(result.llm_based_rating, Rating::Medium);
        assert_eq!(result.combined_rating, Rating::Medium);
        assert!(result.llm_unavailable_criteria.is_empty());
    }

    #[tokio::test]
    async fn test_empty_input_is_all_low() {
        let result = run_assessment("", &rules(), Arc::new(EmptyExtractor), &options()).await;

        assert_eq!(result.rule_based_matches, Default::default());
        assert_eq!(result.llm_validated_matches, Default::default());
        assert_eq!(result.rule_based_rating, Rating::Low);
        assert_eq!(result.llm_based_rating, Rating::Low);
        assert_eq!(result.combined_rating, Rating::Low);
    }

    #[tokio::test]
    async fn test_whitespace_only_input_is_all_low() {
        let result =
            run_assessment("  \n\t \n ", &rules(), Arc::new(EmptyExtractor), &options()).await;
        assert_eq!(result.combined_rating, Rating::Low);
    }

    #[tokio::test]
    async fn test_total_llm_failure_still_returns_complete_result() {
        let result =
            run_assessment(SAMPLE_CV, &rules(), Arc::new(BrokenExtractor), &options()).await;

        // Rule path is unaffected by the LLM outage.
        assert_eq!(result.rule_based_rating, Rating::Medium);
        // Every criterion is tagged unavailable, rating degrades to low.
        assert_eq!(result.llm_unavailable_criteria.len(), 8);
        assert_eq!(result.llm_based_rating, Rating::Low);
        assert_eq!(result.combined_rating, Rating::Low);
    }

    #[tokio::test]
    async fn test_combined_takes_the_lower_rating() {
        // Rule path medium, LLM path finds nothing → low wins.
        let result =
            run_assessment(SAMPLE_CV, &rules(), Arc::new(EmptyExtractor), &options()).await;
        assert_eq!(result.rule_based_rating, Rating::Medium);
        assert_eq!(result.llm_based_rating, Rating::Low);
        assert_eq!(result.combined_rating, Rating::Low);
    }
}
