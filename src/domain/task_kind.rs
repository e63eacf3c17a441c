use std::fmt;

/// Selects the system instruction and lead-in used for a model call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Simplify,
    Summarize,
    ExplainTerm,
}

impl TaskKind {
    pub const ALL: [TaskKind; 3] = [Self::Simplify, Self::Summarize, Self::ExplainTerm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simplify => "simplify",
            Self::Summarize => "summarize",
            Self::ExplainTerm => "explain_term",
        }
    }

    /// Text placed before the payload in the human message.
    pub fn lead_in(&self) -> &'static str {
        match self {
            Self::Simplify => "Please simplify this legal text:\n\n",
            Self::Summarize => "Please summarize this legal document:\n\n",
            Self::ExplainTerm => "Please explain this legal term: ",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
