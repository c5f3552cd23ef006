//! Decision logging to `~/.local/share/cc-metronome/decisions.log`.
//!
//! Opt-in via `settings.log_decisions` and best-effort throughout: any
//! failure to set up or write the log is silently ignored. Logging must
//! never block the hook.

use log::LevelFilter;
use simplelog::WriteLogger;

use crate::eval::{Decision, InvocationRequest};

/// Install a file logger when decision logging is enabled. Without it the
/// `log` macros are no-ops, which is the default posture.
pub fn init(enabled: bool) {
    if !enabled {
        return;
    }
    let Some(home) = std::env::var_os("HOME") else {
        return;
    };
    let log_dir = std::path::Path::new(&home).join(".local/share/cc-metronome");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("decisions.log"))
    else {
        return;
    };

    let config = simplelog::ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let _ = WriteLogger::init(LevelFilter::Debug, config, file);
}

/// Record one evaluation as a single tab-separated line.
pub fn log_decision(request: &InvocationRequest, decision: &Decision) {
    let cmd_truncated: String = request.command.chars().take(200).collect();
    log::info!(
        "{label}\ttool={tool}\tcmd={cmd_truncated}",
        label = decision.label(),
        tool = request.tool_name,
    );
}
