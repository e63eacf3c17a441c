mod bounded_text;
mod document;
mod extracted_text;
mod legal_terms;
mod prompt;
mod task_kind;

pub use bounded_text::BoundedText;
pub use document::{FormatTag, SourceDocument, extension_of};
pub use extracted_text::ExtractedText;
pub use legal_terms::{COMMON_LEGAL_TERMS, DEFAULT_TERM_LIMIT, detect_legal_terms};
pub use prompt::Prompt;
pub use task_kind::TaskKind;
