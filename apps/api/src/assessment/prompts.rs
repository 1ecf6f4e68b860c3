// All LLM prompt constants for the assessment module.
// Reuses the cross-cutting JSON-only fragment from llm_client::prompts.

use crate::assessment::criteria::CriterionKey;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// System prompt for evidence extraction — enforces JSON-only output.
pub const EVIDENCE_SYSTEM: &str = JSON_ONLY_SYSTEM;

/// Schema and extraction rules shared by every criterion prompt.
const EXTRACTION_RULES: &str = r#"Return a JSON object with this EXACT schema (no extra fields):
{"snippets": ["exact passage copied from the CV", "..."]}

Rules:
- Each snippet must be copied verbatim from the CV text below.
- Include every distinct qualifying passage, in the order it appears.
- Return {"snippets": []} if no qualifying evidence exists.
- Do NOT paraphrase, summarize, or invent evidence.

CV TEXT:
{cv_text}"#;

const AWARDS_CRITERION: &str = "\
Extract every passage that evidences a nationally or internationally \
recognized prize or award for excellence in the field. \
Consider: competition wins, prestigious scholarships, industry-specific honors.";

const MEMBERSHIP_CRITERION: &str = "\
Extract every passage that evidences membership in an association that \
requires outstanding achievement for admission, judged by recognized \
national or international experts in the field.";

const PRESS_CRITERION: &str = "\
Extract every passage that evidences published material about the person \
in professional or major trade publications or major media, relating to \
their work in the field.";

const JUDGING_CRITERION: &str = "\
Extract every passage that evidences participation as a judge of the work \
of others: competition judging, peer review for distinguished venues, or \
editorial board membership.";

const ORIGINAL_CONTRIBUTION_CRITERION: &str = "\
Extract every passage that evidences an original scientific, scholarly, or \
business-related contribution of major significance: patented inventions, \
field-changing techniques, widely adopted systems.";

const SCHOLARLY_ARTICLES_CRITERION: &str = "\
Extract every passage that evidences authorship of scholarly articles in \
professional journals or other major media: journal papers, conference \
proceedings, invited book chapters.";

const CRITICAL_EMPLOYMENT_CRITERION: &str = "\
Extract every passage that evidences employment in a critical or essential \
capacity at an organization with a distinguished reputation: leadership \
roles, key technical positions at renowned institutions.";

const HIGH_REMUNERATION_CRITERION: &str = "\
Extract every passage that evidences a high salary or other substantially \
high remuneration relative to others in the field: compensation figures, \
top-percentile earnings, exceptional equity or benefits.";

/// The criterion-specific instruction for an evidence-extraction prompt.
/// Exhaustive by construction: a criterion without a template cannot compile.
fn criterion_instruction(criterion: CriterionKey) -> &'static str {
    match criterion {
        CriterionKey::Awards => AWARDS_CRITERION,
        CriterionKey::Membership => MEMBERSHIP_CRITERION,
        CriterionKey::Press => PRESS_CRITERION,
        CriterionKey::Judging => JUDGING_CRITERION,
        CriterionKey::OriginalContribution => ORIGINAL_CONTRIBUTION_CRITERION,
        CriterionKey::ScholarlyArticles => SCHOLARLY_ARTICLES_CRITERION,
        CriterionKey::CriticalEmployment => CRITICAL_EMPLOYMENT_CRITERION,
        CriterionKey::HighRemuneration => HIGH_REMUNERATION_CRITERION,
    }
}

/// Builds the full evidence-extraction prompt for one criterion.
pub fn build_evidence_prompt(criterion: CriterionKey, cv_text: &str) -> String {
    format!(
        "{}\n\n{}",
        criterion_instruction(criterion),
        EXTRACTION_RULES.replace("{cv_text}", cv_text)
    )
}
