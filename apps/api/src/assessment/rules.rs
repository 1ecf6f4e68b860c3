//! Rule-based criterion matcher.
//!
//! Deterministic and pure: the same text and rule table always produce the
//! same matches, independent of the LLM path. Patterns are written in
//! lowercase and run against the folded copy; snippets are sliced out of the
//! original-case text at the same byte range, widened to the full line so a
//! reviewer sees the surrounding context.

use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::assessment::criteria::CriterionKey;
use crate::assessment::normalize::NormalizedText;

const AWARDS_PATTERNS: &[&str] = &[
    r"\b(award|prize|honor|scholarship|competition winner|top[\s-]*\d+%|excellence)\b",
    r"\b(nobel|grammy|emmy|oscar|pulitzer|forbes\s*30|hackathon winner)\b",
];

const MEMBERSHIP_PATTERNS: &[&str] = &[
    r"\b(member of|fellowship|invited member|board of|selection committee)\b",
    r"\b(ieee|acm|national academy|royal society)\b",
];

const PRESS_PATTERNS: &[&str] = &[
    r"\b(featured in|interviewed by|profiled (in|by)|press coverage|media coverage)\b",
    r"\b(techcrunch|wired|forbes|the new york times|bbc|the economist)\b",
];

const ORIGINAL_CONTRIBUTION_PATTERNS: &[&str] = &[
    r"\b(patent(ed|s)?|invented|pioneered|novel (method|technique|approach)|first to)\b",
    r"\b(widely adopted|industry standard|field.changing)\b",
];

const CRITICAL_EMPLOYMENT_PATTERNS: &[&str] = &[
    r"\b(lead|principal|chief|director|head of|key (role|position)|senior \w+)\b",
    r"\b(united nations|cern|nasa|mit|google|fortune 500)\b",
];

/// Default pattern table covering every rule-based criterion.
const DEFAULT_TABLE: &[(CriterionKey, &[&str])] = &[
    (CriterionKey::Awards, AWARDS_PATTERNS),
    (CriterionKey::Membership, MEMBERSHIP_PATTERNS),
    (CriterionKey::Press, PRESS_PATTERNS),
    (CriterionKey::OriginalContribution, ORIGINAL_CONTRIBUTION_PATTERNS),
    (CriterionKey::CriticalEmployment, CRITICAL_EMPLOYMENT_PATTERNS),
];

/// Configuration-time failures. These are fatal at startup — a rule table
/// that cannot cover every rule-based criterion must not serve requests.
#[derive(Debug, Error)]
pub enum RuleSetError {
    #[error("no rule entry for criterion '{0}'")]
    MissingCriterion(CriterionKey),

    #[error("empty pattern list for criterion '{0}'")]
    EmptyCriterion(CriterionKey),

    #[error("invalid pattern for criterion '{criterion}': {source}")]
    BadPattern {
        criterion: CriterionKey,
        #[source]
        source: regex::Error,
    },
}

/// Compiled per-criterion pattern sets.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<(CriterionKey, Vec<Regex>)>,
}

impl RuleSet {
    /// Compiles the built-in pattern table.
    pub fn compiled() -> Result<Self, RuleSetError> {
        Self::from_table(DEFAULT_TABLE)
    }

    /// Compiles an explicit table, validating that every rule-based
    /// criterion is present with at least one well-formed pattern.
    pub fn from_table(table: &[(CriterionKey, &[&str])]) -> Result<Self, RuleSetError> {
        let mut rules = Vec::with_capacity(CriterionKey::RULE_BASED.len());

        for criterion in CriterionKey::RULE_BASED {
            let patterns = table
                .iter()
                .find(|(key, _)| *key == criterion)
                .map(|(_, patterns)| *patterns)
                .ok_or(RuleSetError::MissingCriterion(criterion))?;

            if patterns.is_empty() {
                return Err(RuleSetError::EmptyCriterion(criterion));
            }

            let compiled = patterns
                .iter()
                .map(|pattern| {
                    Regex::new(pattern).map_err(|source| RuleSetError::BadPattern {
                        criterion,
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            rules.push((criterion, compiled));
        }

        Ok(Self { rules })
    }

    /// Scans the normalized text and returns matched snippets per criterion.
    /// Every rule-based criterion appears as a key, empty when nothing hit.
    /// Snippets are deduplicated per criterion with first-match order kept.
    pub fn scan(&self, cv: &NormalizedText) -> BTreeMap<CriterionKey, Vec<String>> {
        let mut results = BTreeMap::new();

        for (criterion, patterns) in &self.rules {
            let mut snippets: Vec<String> = Vec::new();

            for pattern in patterns {
                for found in pattern.find_iter(&cv.folded) {
                    let snippet = line_containing(cv, found.start(), found.end());
                    if !snippet.is_empty() && !snippets.iter().any(|s| s == snippet) {
                        snippets.push(snippet.to_string());
                    }
                }
            }

            results.insert(*criterion, snippets);
        }

        results
    }
}

/// Number of criteria with at least one snippet. Presence-only: repeated
/// matches within one criterion still count as a single hit.
pub fn hit_count(matches: &BTreeMap<CriterionKey, Vec<String>>) -> usize {
    matches.values().filter(|snippets| !snippets.is_empty()).count()
}

/// Widens a match range in the folded copy to the full line and slices it
/// out of the original-case text. Valid because folding preserves byte
/// offsets (see `normalize`).
fn line_containing<'a>(cv: &'a NormalizedText, start: usize, end: usize) -> &'a str {
    let line_start = cv.folded[..start].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = cv.folded[end..]
        .find('\n')
        .map(|i| end + i)
        .unwrap_or(cv.folded.len());
    cv.text[line_start..line_end].trim()
}
