//! Wire types for the assessment API.
//!
//! The match containers are structs rather than maps so the exact key sets
//! demanded by the contract cannot drift: the rule-based container always
//! serializes its five criteria, the LLM container its eight, empty lists
//! included.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::assessment::criteria::CriterionKey;
use crate::assessment::rating::Rating;

/// Matches from the rule-based scan — exactly the five rule criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleBasedMatches {
    pub awards: Vec<String>,
    pub membership: Vec<String>,
    pub press: Vec<String>,
    pub original_contribution: Vec<String>,
    pub critical_employment: Vec<String>,
}

impl RuleBasedMatches {
    /// Absent criteria default to empty lists.
    pub fn from_map(mut map: BTreeMap<CriterionKey, Vec<String>>) -> Self {
        let mut take = |criterion| map.remove(&criterion).unwrap_or_default();
        Self {
            awards: take(CriterionKey::Awards),
            membership: take(CriterionKey::Membership),
            press: take(CriterionKey::Press),
            original_contribution: take(CriterionKey::OriginalContribution),
            critical_employment: take(CriterionKey::CriticalEmployment),
        }
    }
}

/// Matches from LLM validation — exactly the eight-criterion superset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmValidatedMatches {
    pub awards: Vec<String>,
    pub membership: Vec<String>,
    pub press: Vec<String>,
    pub judging: Vec<String>,
    pub original_contribution: Vec<String>,
    pub scholarly_articles: Vec<String>,
    pub critical_employment: Vec<String>,
    pub high_remuneration: Vec<String>,
}

impl LlmValidatedMatches {
    /// Absent criteria default to empty lists.
    pub fn from_map(mut map: BTreeMap<CriterionKey, Vec<String>>) -> Self {
        let mut take = |criterion| map.remove(&criterion).unwrap_or_default();
        Self {
            awards: take(CriterionKey::Awards),
            membership: take(CriterionKey::Membership),
            press: take(CriterionKey::Press),
            judging: take(CriterionKey::Judging),
            original_contribution: take(CriterionKey::OriginalContribution),
            scholarly_articles: take(CriterionKey::ScholarlyArticles),
            critical_employment: take(CriterionKey::CriticalEmployment),
            high_remuneration: take(CriterionKey::HighRemuneration),
        }
    }
}

/// Terminal record for one CV submission. Immutable once built; every field
/// is always present on the wire, even under partial LLM failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub rule_based_matches: RuleBasedMatches,
    pub rule_based_rating: Rating,
    pub llm_validated_matches: LlmValidatedMatches,
    pub llm_based_rating: Rating,
    pub combined_rating: Rating,
    /// Criteria whose LLM validation could not run (timeout, network, parse
    /// failure) — distinct from an empty list, which means "no evidence".
    pub llm_unavailable_criteria: Vec<CriterionKey>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample_result() -> AssessmentResult {
        AssessmentResult {
            rule_based_matches: RuleBasedMatches {
                awards: vec!["Won the Turing Award".to_string()],
                ..Default::default()
            },
            rule_based_rating: Rating::Medium,
            llm_validated_matches: LlmValidatedMatches {
                awards: vec!["Won the Turing Award".to_string()],
                ..Default::default()
            },
            llm_based_rating: Rating::Low,
            combined_rating: Rating::Low,
            llm_unavailable_criteria: vec![CriterionKey::Judging],
        }
    }

    fn object_keys(value: &Value) -> Vec<String> {
        value
            .as_object()
            .expect("expected JSON object")
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn test_rule_based_matches_wire_keys() {
        let value = serde_json::to_value(RuleBasedMatches::default()).unwrap();
        let mut keys = object_keys(&value);
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "awards",
                "critical_employment",
                "membership",
                "original_contribution",
                "press",
            ]
        );
    }

    #[test]
    fn test_llm_validated_matches_wire_keys() {
        let value = serde_json::to_value(LlmValidatedMatches::default()).unwrap();
        let mut keys = object_keys(&value);
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "awards",
                "critical_employment",
                "high_remuneration",
                "judging",
                "membership",
                "original_contribution",
                "press",
                "scholarly_articles",
            ]
        );
    }

    #[test]
    fn test_result_top_level_wire_fields() {
        let value = serde_json::to_value(sample_result()).unwrap();
        let mut keys = object_keys(&value);
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "combined_rating",
                "llm_based_rating",
                "llm_unavailable_criteria",
                "llm_validated_matches",
                "rule_based_matches",
                "rule_based_rating",
            ]
        );
    }

    #[test]
    fn test_ratings_serialize_as_lowercase_strings() {
        let value = serde_json::to_value(sample_result()).unwrap();
        assert_eq!(value["rule_based_rating"], "medium");
        assert_eq!(value["llm_based_rating"], "low");
        assert_eq!(value["combined_rating"], "low");
        assert_eq!(value["llm_unavailable_criteria"][0], "judging");
    }

    #[test]
    fn test_empty_lists_are_serialized_not_omitted() {
        let value = serde_json::to_value(sample_result()).unwrap();
        assert!(value["rule_based_matches"]["press"].as_array().unwrap().is_empty());
        assert!(value["llm_validated_matches"]["high_remuneration"]
            .as_array()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_from_map_fills_missing_criteria_with_empty_lists() {
        let mut map = BTreeMap::new();
        map.insert(CriterionKey::Awards, vec!["snippet".to_string()]);
        let matches = LlmValidatedMatches::from_map(map);
        assert_eq!(matches.awards.len(), 1);
        assert!(matches.judging.is_empty());
        assert!(matches.high_remuneration.is_empty());
    }

    #[test]
    fn test_from_map_ignores_criteria_outside_rule_scope() {
        let mut map = BTreeMap::new();
        map.insert(CriterionKey::Judging, vec!["snippet".to_string()]);
        let matches = RuleBasedMatches::from_map(map);
        assert_eq!(matches, RuleBasedMatches::default());
    }
}
