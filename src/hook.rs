//! Hook envelope: the JSON Claude Code writes to stdin and the permission
//! decision it reads back from stdout.
//!
//! Every field is optional. A host sending an unexpected shape must degrade
//! to "nothing to check", never to a parse failure that blocks the pipeline.

use serde::Deserialize;

use crate::eval::Decision;

#[derive(Debug, Deserialize)]
pub struct HookInput {
    pub tool_name: Option<String>,
    pub tool_input: Option<ToolInput>,
    pub transcript_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ToolInput {
    pub command: Option<String>,
}

impl HookInput {
    /// Parse the stdin payload. `None` means fail-open.
    pub fn parse(input: &str) -> Option<Self> {
        serde_json::from_str(input).ok()
    }
}

/// Render the stdout payload for a decision.
///
/// Allow produces no output: Claude Code treats hook silence (exit 0, empty
/// stdout) as "proceed". Block produces the PreToolUse deny envelope with the
/// guidance as the reason shown to the agent.
pub fn render_response(decision: &Decision) -> Option<String> {
    match decision {
        Decision::Allow => None,
        Decision::Block { message } => {
            let payload = serde_json::json!({
                "hookSpecificOutput": {
                    "hookEventName": "PreToolUse",
                    "permissionDecision": "deny",
                    "permissionDecisionReason": message,
                }
            });
            Some(payload.to_string())
        }
    }
}
