//! cc-metronome: a PreToolUse hook for Claude Code that detects
//! shortcut-taking language and redirects the agent to step-by-step work.
//!
//! When an agent announces it will "handle the rest efficiently", what
//! usually follows is a risky bulk operation: stream-editing many files,
//! reverting via version control and losing unrelated uncommitted edits.
//! This crate gates Bash tool calls on exactly that signal. The rationale
//! text accompanying the call (the current assistant response pulled from
//! the session transcript) is checked against a small multilingual table of
//! "efficiency" stems; a match denies the call with a fixed corrective
//! instruction. The command itself is never inspected.
//!
//! The hook is stateless, pure, and fail-open: malformed input, a missing
//! transcript, or an unrecognized tool all allow. A hook that crashes blocks
//! the entire tool-use pipeline, so keeping the session running takes
//! priority over detection.
//!
//! # Architecture
//!
//! - **[`eval`]** — Decision engine: trigger rules, rule set, allow/block decision.
//! - **[`transcript`]** — Rationale extraction from the session transcript JSONL.
//! - **[`hook`]** — Stdin/stdout envelope types and deny payload rendering.
//! - **[`config`]** — Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]** — Opt-in decision logging to `~/.local/share/cc-metronome/decisions.log`.

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Decision engine: trigger rules and allow/block evaluation.
pub mod eval;
/// Hook input/output envelope.
pub mod hook;
/// Opt-in file-based decision logging.
pub mod logging;
/// Transcript tail scanning for the current assistant response text.
pub mod transcript;

pub use eval::{Decision, InvocationRequest, RuleSet};

/// Build the rule set from default config and evaluate a request.
///
/// This is the main entry point for tests and simple usage.
/// For user-config-aware usage, build the [`RuleSet`] from [`config::Config::load`].
pub fn evaluate(request: &InvocationRequest) -> Decision {
    let config = config::Config::default_config();
    let rules = RuleSet::from_config(&config);
    rules.evaluate(request)
}
