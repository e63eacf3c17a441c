use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

pub const DEFAULT_TERM_LIMIT: usize = 10;

const MIN_TERM_LENGTH: usize = 4;

pub const COMMON_LEGAL_TERMS: [&str; 20] = [
    "Force Majeure",
    "Indemnification",
    "Breach of Contract",
    "Liquidated Damages",
    "Arbitration",
    "Jurisdiction",
    "Statute of Limitations",
    "Consideration",
    "Due Diligence",
    "Material Adverse Effect",
    "Severability",
    "Waiver",
    "Covenant",
    "Representation",
    "Warranty",
    "Default",
    "Remedy",
    "Damages",
    "Specific Performance",
    "Injunction",
];

// Order matters: earlier patterns win the limited slots.
static TERM_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b[A-Z][a-z]+(?:[ \t]+[A-Z][a-zA-Z]*)*\b",
        r"(?i)\b(?:hereby|whereas|hereinafter|aforesaid|pursuant|whereby|notwithstanding)\b",
        r"(?i)\b(?:party|parties|agreement|contract|terms|conditions|liability|damages|breach|termination)\b",
        r"(?i)\b(?:prima facie|de facto|de jure|pro bono|ad hoc|ex parte|in camera|subpoena)\b",
        r"(?i)\b(?:consideration|offer|acceptance|capacity|legality|mutual assent|meeting of minds)\b",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Finds candidate legal terms worth explaining, lower-cased and de-duplicated in first-seen order.
pub fn detect_legal_terms(text: &str, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut terms = Vec::new();

    for pattern in TERM_PATTERNS.iter() {
        for found in pattern.find_iter(text) {
            if terms.len() == limit {
                return terms;
            }

            let term = found.as_str();
            if term.chars().count() < MIN_TERM_LENGTH {
                continue;
            }

            let normalized = term.to_lowercase();
            if seen.insert(normalized.clone()) {
                terms.push(normalized);
            }
        }
    }

    terms
}
