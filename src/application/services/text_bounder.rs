use crate::domain::{BoundedText, TaskKind};

pub const SIMPLIFY_BUDGET: usize = 4000;
pub const SUMMARIZE_BUDGET: usize = 3000;

/// Character budgets per task. Term explanation is never bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBudgets {
    pub simplify: usize,
    pub summarize: usize,
}

impl Default for TextBudgets {
    fn default() -> Self {
        Self {
            simplify: SIMPLIFY_BUDGET,
            summarize: SUMMARIZE_BUDGET,
        }
    }
}

impl TextBudgets {
    pub fn for_task(&self, task: TaskKind) -> Option<usize> {
        match task {
            TaskKind::Simplify => Some(self.simplify),
            TaskKind::Summarize => Some(self.summarize),
            TaskKind::ExplainTerm => None,
        }
    }
}

/// Keeps the first `budget` characters of `text`. Counts chars, not bytes, so the cut never
/// splits a code point.
pub fn bound_text(text: &str, budget: usize) -> BoundedText {
    match text.char_indices().nth(budget) {
        Some((byte_idx, _)) => BoundedText {
            content: text[..byte_idx].to_string(),
            budget,
            truncated: true,
        },
        None => BoundedText {
            content: text.to_string(),
            budget,
            truncated: false,
        },
    }
}
