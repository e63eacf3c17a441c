#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system_instruction: String,
    pub human_payload: String,
}

impl Prompt {
    pub fn new(system_instruction: String, human_payload: String) -> Self {
        Self {
            system_instruction,
            human_payload,
        }
    }
}
