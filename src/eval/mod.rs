pub mod decision;
pub mod rules;

pub use decision::{Decision, InvocationRequest};
pub use rules::{GUIDANCE, TriggerRule, builtin_rules};

use crate::config::Config;

/// The trigger rules plus the set of guarded tool names, assembled once from
/// configuration. Holds no mutable state; evaluation is pure, so a single
/// rule set may be shared across threads or rebuilt per call with identical
/// results.
pub struct RuleSet {
    rules: Vec<TriggerRule>,
    guarded_tools: Vec<String>,
}

impl RuleSet {
    /// Build the rule set from configuration: the built-in multilingual table
    /// followed by any user-configured extra stems (always case-insensitive).
    pub fn from_config(config: &Config) -> Self {
        let mut rules = builtin_rules();
        for stem in &config.patterns.extra {
            rules.push(TriggerRule::case_insensitive(stem));
        }
        Self {
            rules,
            guarded_tools: config.tools.guarded.clone(),
        }
    }

    /// Decide allow/block for one invocation.
    ///
    /// Only guarded tools are inspected, and only the rationale text: the
    /// command itself is never pattern-matched. Rules are a logical OR, so
    /// the first firing rule short-circuits to a block carrying the fixed
    /// guidance. There is no input shape that produces an error; anything
    /// unrecognized or absent degrades to `Allow`.
    pub fn evaluate(&self, request: &InvocationRequest) -> Decision {
        if !self.guarded_tools.iter().any(|t| t == request.tool_name) {
            return Decision::Allow;
        }

        let rationale = request.rationale.unwrap_or("");
        if rationale.is_empty() {
            return Decision::Allow;
        }

        let rationale_lower = rationale.to_lowercase();
        for rule in &self.rules {
            if rule.matches(rationale, &rationale_lower) {
                return Decision::Block {
                    message: GUIDANCE.to_string(),
                };
            }
        }

        Decision::Allow
    }
}
