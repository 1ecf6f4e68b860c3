//! The eight USCIS O-1A evidentiary criteria.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight evidence categories a CV may satisfy.
/// Serde spellings double as the wire key names, so they must stay snake_case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKey {
    Awards,
    Membership,
    Press,
    Judging,
    OriginalContribution,
    ScholarlyArticles,
    CriticalEmployment,
    HighRemuneration,
}

impl CriterionKey {
    /// All eight criteria, in wire order. The LLM validator covers this full set.
    pub const ALL: [CriterionKey; 8] = [
        CriterionKey::Awards,
        CriterionKey::Membership,
        CriterionKey::Press,
        CriterionKey::Judging,
        CriterionKey::OriginalContribution,
        CriterionKey::ScholarlyArticles,
        CriterionKey::CriticalEmployment,
        CriterionKey::HighRemuneration,
    ];

    /// The subset the rule-based matcher carries patterns for.
    pub const RULE_BASED: [CriterionKey; 5] = [
        CriterionKey::Awards,
        CriterionKey::Membership,
        CriterionKey::Press,
        CriterionKey::OriginalContribution,
        CriterionKey::CriticalEmployment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionKey::Awards => "awards",
            CriterionKey::Membership => "membership",
            CriterionKey::Press => "press",
            CriterionKey::Judging => "judging",
            CriterionKey::OriginalContribution => "original_contribution",
            CriterionKey::ScholarlyArticles => "scholarly_articles",
            CriterionKey::CriticalEmployment => "critical_employment",
            CriterionKey::HighRemuneration => "high_remuneration",
        }
    }
}

impl fmt::Display for CriterionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
