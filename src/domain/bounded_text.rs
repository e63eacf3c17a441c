/// Text cut to at most `budget` characters before it is handed to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedText {
    pub content: String,
    pub budget: usize,
    pub truncated: bool,
}

impl BoundedText {
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}
