mod ai_invoker;
mod document_service;
mod prompt_builder;
mod task_error;
mod text_bounder;

pub use ai_invoker::AiInvoker;
pub use document_service::{DocumentService, TaskOutput, UploadOutcome};
pub use prompt_builder::{
    PromptBuilder, PromptTemplates, SIMPLIFICATION_PROMPT, SUMMARY_PROMPT, TERM_EXPLANATION_PROMPT,
};
pub use task_error::{TaskError, TaskFailureKind};
pub use text_bounder::{SIMPLIFY_BUDGET, SUMMARIZE_BUDGET, TextBudgets, bound_text};
