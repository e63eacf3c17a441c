use std::sync::Arc;

use crate::domain::{Prompt, TaskKind};

pub const SIMPLIFICATION_PROMPT: &str = "You are a legal expert who specializes in making complex legal documents understandable to the general public.
Your task is to:
1. Simplify complex legal language into plain English
2. Maintain the legal meaning and accuracy
3. Use clear, simple language that a high school student could understand
4. Break down complex sentences into shorter, clearer ones
5. Replace legal jargon with everyday language when possible

Format your response as:
- Simplified Text: [the simplified version]
- Key Terms Explained: [list and explain important legal terms]
- Summary: [2-3 sentence summary of the main points]";

pub const SUMMARY_PROMPT: &str = "You are a legal expert who creates clear, concise summaries of legal documents.
Create a summary that:
1. Captures the main purpose and key points
2. Identifies the most important legal implications
3. Highlights any deadlines, requirements, or actions needed
4. Uses simple, clear language

Keep your summary under 200 words.";

pub const TERM_EXPLANATION_PROMPT: &str = "You are a legal expert who explains legal terms in simple, understandable language.
For each legal term, provide:
1. A simple definition in plain English
2. A practical example of how it's used
3. Why it's important to understand

Keep your explanation under 100 words and use everyday language.";

/// System instructions keyed by task. Built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplates {
    simplify: String,
    summarize: String,
    explain_term: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            simplify: SIMPLIFICATION_PROMPT.to_string(),
            summarize: SUMMARY_PROMPT.to_string(),
            explain_term: TERM_EXPLANATION_PROMPT.to_string(),
        }
    }
}

impl PromptTemplates {
    /// Any `None` falls back to the built-in instruction for that task.
    pub fn with_overrides(
        simplify: Option<String>,
        summarize: Option<String>,
        explain_term: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            simplify: simplify.unwrap_or(defaults.simplify),
            summarize: summarize.unwrap_or(defaults.summarize),
            explain_term: explain_term.unwrap_or(defaults.explain_term),
        }
    }

    pub fn template(&self, task: TaskKind) -> &str {
        match task {
            TaskKind::Simplify => &self.simplify,
            TaskKind::Summarize => &self.summarize,
            TaskKind::ExplainTerm => &self.explain_term,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    templates: Arc<PromptTemplates>,
}

impl PromptBuilder {
    pub fn new(templates: PromptTemplates) -> Self {
        Self {
            templates: Arc::new(templates),
        }
    }

    pub fn templates(&self) -> &PromptTemplates {
        &self.templates
    }

    /// Pure string composition: the task's instruction plus its lead-in followed by `payload`.
    pub fn build(&self, task: TaskKind, payload: &str) -> Prompt {
        let lead_in = task.lead_in();
        let mut human_payload = String::with_capacity(lead_in.len() + payload.len());
        human_payload.push_str(lead_in);
        human_payload.push_str(payload);

        Prompt::new(self.templates.template(task).to_string(), human_payload)
    }
}
