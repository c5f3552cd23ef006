//! Rationale extraction from the session transcript.
//!
//! Claude Code hands the hook a `transcript_path` pointing at the session
//! JSONL. The rationale for the pending tool call is the text of the current
//! assistant response, which Claude Code splits across multiple entries
//! (one for text, another for tool_use). The entry closest to PreToolUse time
//! is often a tool_use block with no text at all, so the scan walks backwards
//! past textless assistant entries and stops at the first non-assistant entry
//! so only the current response is considered.
//!
//! Everything here is best-effort: a missing file, unreadable bytes, or
//! malformed lines all yield an empty string, which the engine treats as
//! "nothing to match".

use serde_json::Value;
use std::path::Path;

/// Only the tail of the transcript is relevant; long sessions can reach
/// tens of megabytes.
const TAIL_LINES: usize = 100;

/// Return text from the most recent assistant entry that contains text,
/// or an empty string if there is none.
pub fn last_assistant_text(path: &Path) -> String {
    if !path.is_file() {
        return String::new();
    }
    let Ok(content) = std::fs::read_to_string(path) else {
        log::debug!("transcript unreadable: {}", path.display());
        return String::new();
    };

    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(TAIL_LINES);
    let entries: Vec<Value> = lines[start..]
        .iter()
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect();

    for entry in entries.iter().rev() {
        if entry.get("type").and_then(Value::as_str) != Some("assistant") {
            break;
        }
        let texts = text_blocks(entry);
        if !texts.is_empty() {
            return texts.join("\n");
        }
    }

    String::new()
}

/// Collect the non-empty text blocks of one assistant entry.
fn text_blocks(entry: &Value) -> Vec<&str> {
    let Some(blocks) = entry.pointer("/message/content").and_then(Value::as_array) else {
        return Vec::new();
    };
    blocks
        .iter()
        .filter(|b| b.get("type").and_then(Value::as_str) == Some("text"))
        .filter_map(|b| b.get("text").and_then(Value::as_str))
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    struct Fixture(PathBuf);

    impl Drop for Fixture {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    fn write_transcript(lines: &[String]) -> Fixture {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "cc-metronome-test-{}-{n}.jsonl",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", lines.join("\n")).unwrap();
        Fixture(path)
    }

    fn assistant_entry(text: &str) -> String {
        serde_json::json!({
            "type": "assistant",
            "message": { "content": [{ "type": "text", "text": text }] },
        })
        .to_string()
    }

    fn tool_use_entry() -> String {
        serde_json::json!({
            "type": "assistant",
            "message": {
                "content": [{
                    "type": "tool_use",
                    "id": "call-1",
                    "name": "Bash",
                    "input": { "command": "echo hello" },
                }]
            },
        })
        .to_string()
    }

    fn user_entry(text: &str) -> String {
        serde_json::json!({ "type": "user", "message": { "content": text } }).to_string()
    }

    #[test]
    fn returns_last_assistant_text() {
        let f = write_transcript(&[
            user_entry("Fix the bug"),
            assistant_entry("Let me fix the first test case."),
        ]);
        assert_eq!(last_assistant_text(&f.0), "Let me fix the first test case.");
    }

    #[test]
    fn skips_trailing_tool_use_entry() {
        let f = write_transcript(&[assistant_entry("効率的に作業します。"), tool_use_entry()]);
        assert_eq!(last_assistant_text(&f.0), "効率的に作業します。");
    }

    #[test]
    fn stops_at_user_entry() {
        // Text in an older response must not leak into the current one.
        let f = write_transcript(&[
            assistant_entry("I will work efficiently on this."),
            user_entry("OK"),
            tool_use_entry(),
        ]);
        assert_eq!(last_assistant_text(&f.0), "");
    }

    #[test]
    fn missing_file_yields_empty() {
        let path = Path::new("/nonexistent/path/transcript.jsonl");
        assert_eq!(last_assistant_text(path), "");
    }

    #[test]
    fn empty_file_yields_empty() {
        let f = write_transcript(&[]);
        assert_eq!(last_assistant_text(&f.0), "");
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let f = write_transcript(&[
            "not json".to_string(),
            "{\"type\": \"broken\"".to_string(),
            assistant_entry("Normal message."),
        ]);
        assert_eq!(last_assistant_text(&f.0), "Normal message.");
    }

    #[test]
    fn multiple_text_blocks_are_joined() {
        let entry = serde_json::json!({
            "type": "assistant",
            "message": {
                "content": [
                    { "type": "text", "text": "First." },
                    { "type": "tool_use", "id": "x", "name": "Bash", "input": {} },
                    { "type": "text", "text": "Second." },
                ]
            },
        })
        .to_string();
        let f = write_transcript(&[entry]);
        assert_eq!(last_assistant_text(&f.0), "First.\nSecond.");
    }
}
