mod error;
mod explain;
mod health;
mod simplify;
mod summarize;
mod terms;
mod upload;

pub use error::ErrorResponse;
pub use explain::explain_handler;
pub use health::health_handler;
pub use simplify::simplify_handler;
pub use summarize::summarize_handler;
pub use terms::{common_terms_handler, detect_terms_handler};
pub use upload::upload_handler;
