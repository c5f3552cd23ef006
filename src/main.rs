//! cc-metronome: PreToolUse hook for Claude Code.
//!
//! Reads hook JSON from stdin; when the current assistant response contains
//! an "efficiency" phrase, writes a deny decision to stdout.
//!
//! Every failure path — unreadable stdin, malformed JSON, missing transcript —
//! exits 0 with no output. A hook that crashes or returns non-zero blocks the
//! entire tool-use pipeline; detection is best-effort.

use std::io::Read;
use std::path::Path;

use cc_metronome::config::Config;
use cc_metronome::eval::{InvocationRequest, RuleSet};
use cc_metronome::{hook, logging, transcript};

fn main() {
    let mut input = String::new();
    if std::io::stdin().read_to_string(&mut input).is_err() {
        return;
    }
    let Some(hook_input) = hook::HookInput::parse(&input) else {
        return;
    };

    let config = Config::load();
    logging::init(config.settings.log_decisions);

    let tool_name = hook_input.tool_name.as_deref().unwrap_or("");
    let command = hook_input
        .tool_input
        .as_ref()
        .and_then(|t| t.command.as_deref())
        .unwrap_or("");
    let rationale = hook_input
        .transcript_path
        .as_deref()
        .map(|p| transcript::last_assistant_text(Path::new(p)))
        .unwrap_or_default();

    let request = InvocationRequest {
        tool_name,
        command,
        rationale: (!rationale.is_empty()).then_some(rationale.as_str()),
    };

    let rules = RuleSet::from_config(&config);
    let decision = rules.evaluate(&request);
    logging::log_decision(&request, &decision);

    if let Some(payload) = hook::render_response(&decision) {
        println!("{payload}");
    }
}
