//! Built-in trigger rules and the fixed guidance text.
//!
//! Each rule is a substring predicate over the rationale. Scripts with case
//! distinctions (Latin, Cyrillic) match against a lowercased copy of the
//! rationale; caseless scripts (CJK, Hangul) match verbatim.
//!
//! Substring matching is intentional over word-boundary matching. The goal is
//! to catch shortcut-taking language broadly; a false positive on a negated
//! form like "inefficient" is an acceptable trade-off because such wording
//! still signals efficiency-oriented thinking.

/// Corrective guidance returned on every block. Always this exact string:
/// it never varies by which rule fired, never names the matched phrase, and
/// contains no prohibition, only a positive instruction.
pub const GUIDANCE: &str =
    "Slow down.\n\nRead the current task, execute it, verify the result, then move to the next.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerRule {
    /// Fires when the (pre-lowercased) pattern appears in the lowercased
    /// rationale.
    CaseInsensitiveSubstring(String),
    /// Fires when the pattern appears verbatim in the raw rationale.
    ExactSubstring(String),
    /// Fires only when every pattern appears verbatim in the raw rationale.
    AllOfExactSubstrings(Vec<String>),
}

impl TriggerRule {
    /// Build a case-insensitive rule, lowercasing the pattern once up front.
    pub fn case_insensitive(stem: &str) -> Self {
        TriggerRule::CaseInsensitiveSubstring(stem.to_lowercase())
    }

    /// Check this rule against a rationale. `rationale_lower` must be the
    /// lowercased form of `rationale`; the caller computes it once for the
    /// whole rule list.
    pub fn matches(&self, rationale: &str, rationale_lower: &str) -> bool {
        match self {
            TriggerRule::CaseInsensitiveSubstring(stem) => rationale_lower.contains(stem.as_str()),
            TriggerRule::ExactSubstring(stem) => rationale.contains(stem.as_str()),
            TriggerRule::AllOfExactSubstrings(stems) => {
                stems.iter().all(|s| rationale.contains(s.as_str()))
            }
        }
    }
}

/// The built-in multilingual rule table: phrases an agent uses when it is
/// about to trade careful step-by-step work for a risky bulk operation.
pub fn builtin_rules() -> Vec<TriggerRule> {
    vec![
        // English: efficient, efficiently, efficiency
        TriggerRule::case_insensitive("efficien"),
        // Japanese: 効率的, 効率化
        TriggerRule::ExactSubstring("効率".into()),
        // Chinese: a single short stem collides with too many unrelated
        // phrases, so the rule requires both 高效 and 效率 before firing.
        TriggerRule::AllOfExactSubstrings(vec!["高效".into(), "效率".into()]),
        // German: effizient, Effizienz
        TriggerRule::case_insensitive("effizien"),
        // French: efficace, efficacement, efficacité
        TriggerRule::case_insensitive("efficac"),
        // Spanish / Portuguese: eficiente, eficientemente, eficiencia
        TriggerRule::case_insensitive("eficien"),
        // Korean: 효율적으로, 효율화
        TriggerRule::ExactSubstring("효율".into()),
        // Russian: эффективно, эффективность
        TriggerRule::case_insensitive("эффектив"),
    ]
}
