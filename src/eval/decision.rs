/// One tool invocation as seen by the hook. Borrowed from the envelope;
/// created fresh per call, never persisted.
#[derive(Debug, Clone, Copy)]
pub struct InvocationRequest<'a> {
    /// Tool identifier (e.g. "Bash"). Compared against the guarded set.
    pub tool_name: &'a str,
    /// The literal command about to run. Never pattern-matched; the danger
    /// signal is the stated intent, not the command content. Kept for logging.
    pub command: &'a str,
    /// Free-text justification supplied alongside the command. The only
    /// field the rules inspect. `None` behaves like the empty string.
    pub rationale: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Block { message: String },
}

impl Decision {
    pub fn is_block(&self) -> bool {
        matches!(self, Decision::Block { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Decision::Allow => "ALLOW",
            Decision::Block { .. } => "BLOCK",
        }
    }
}
