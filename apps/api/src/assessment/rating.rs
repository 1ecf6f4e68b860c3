//! Rating derivation and reconciliation.
//!
//! Both rating paths use presence-only hit counting: a criterion either has
//! evidence or it does not, regardless of how many snippets matched. The
//! combiner takes the lower of the two ratings so the final answer never
//! overstates what either signal supports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum number of matched criteria (out of 5) for a high rule-based rating.
pub const RULE_HIGH_MIN_HITS: usize = 3;
/// Minimum number of matched criteria (out of 5) for a medium rule-based rating.
pub const RULE_MEDIUM_MIN_HITS: usize = 1;

/// Minimum number of matched criteria (out of 8) for a high LLM-based rating.
pub const LLM_HIGH_MIN_HITS: usize = 5;
/// Minimum number of matched criteria (out of 8) for a medium LLM-based rating.
pub const LLM_MEDIUM_MIN_HITS: usize = 2;

/// Ordinal eligibility rating. Variant order is the ordering
/// (`Low < Medium < High`) — the combiner relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Low,
    Medium,
    High,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Low => "low",
            Rating::Medium => "medium",
            Rating::High => "high",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rates the rule-based scan from the number of criteria with evidence (0–5).
pub fn rule_rating(hit_count: usize) -> Rating {
    if hit_count >= RULE_HIGH_MIN_HITS {
        Rating::High
    } else if hit_count >= RULE_MEDIUM_MIN_HITS {
        Rating::Medium
    } else {
        Rating::Low
    }
}

/// Rates the LLM validation from the number of criteria with evidence (0–8).
/// Thresholds scale the rule-based ones to the larger criterion set.
pub fn llm_rating(hit_count: usize) -> Rating {
    if hit_count >= LLM_HIGH_MIN_HITS {
        Rating::High
    } else if hit_count >= LLM_MEDIUM_MIN_HITS {
        Rating::Medium
    } else {
        Rating::Low
    }
}

/// Reconciles the two independent ratings: agreement returns the agreed
/// value, disagreement returns the lower of the two. Order-independent.
pub fn combine(rule_based: Rating, llm_based: Rating) -> Rating {
    rule_based.min(llm_based)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rating::{High, Low, Medium};

    #[test]
    fn test_combine_all_nine_cells() {
        // Full 3x3 decision table — every cell pinned so the policy cannot drift.
        let table = [
            (Low, Low, Low),
            (Low, Medium, Low),
            (Low, High, Low),
            (Medium, Low, Low),
            (Medium, Medium, Medium),
            (Medium, High, Medium),
            (High, Low, Low),
            (High, Medium, Medium),
            (High, High, High),
        ];
        for (rule, llm, expected) in table {
            assert_eq!(
                combine(rule, llm),
                expected,
                "combine({rule}, {llm}) should be {expected}"
            );
        }
    }

    #[test]
    fn test_combine_is_order_independent() {
        for rule in [Low, Medium, High] {
            for llm in [Low, Medium, High] {
                assert_eq!(combine(rule, llm), combine(llm, rule));
            }
        }
    }

    #[test]
    fn test_rule_rating_thresholds() {
        assert_eq!(rule_rating(0), Low);
        assert_eq!(rule_rating(1), Medium);
        assert_eq!(rule_rating(2), Medium);
        assert_eq!(rule_rating(3), High);
        assert_eq!(rule_rating(5), High);
    }

    #[test]
    fn test_llm_rating_thresholds() {
        assert_eq!(llm_rating(0), Low);
        assert_eq!(llm_rating(1), Low);
        assert_eq!(llm_rating(2), Medium);
        assert_eq!(llm_rating(4), Medium);
        assert_eq!(llm_rating(5), High);
        assert_eq!(llm_rating(8), High);
    }

    #[test]
    fn test_rating_ordering() {
        assert!(Low < Medium);
        assert!(Medium < High);
    }

    #[test]
    fn test_rating_wire_spelling() {
        assert_eq!(serde_json::to_string(&Low).unwrap(), "\"low\"");
        assert_eq!(serde_json::to_string(&Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&High).unwrap(), "\"high\"");
    }

    #[test]
    fn test_rating_is_deterministic_for_same_hit_count() {
        for hits in 0..=5 {
            assert_eq!(rule_rating(hits), rule_rating(hits));
        }
        for hits in 0..=8 {
            assert_eq!(llm_rating(hits), llm_rating(hits));
        }
    }
}
