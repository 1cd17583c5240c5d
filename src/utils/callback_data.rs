//! Payloads carried by inline keyboard buttons.
//!
//! Category buttons carry the raw category text. Navigation buttons use the
//! reserved `nav:` prefix, so a category literally starting with `nav:` cannot
//! be selected from a button.

/// Payload of the "Back to Categories" button.
pub const BACK_TO_CATEGORIES: &str = "nav:categories";
/// Prefix of the "Back to Questions" payload; the category follows it.
pub const BACK_TO_QUESTIONS_PREFIX: &str = "nav:questions:";
/// Telegram rejects `callback_data` longer than this many bytes.
pub const MAX_CALLBACK_DATA_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    SelectCategory(String),
    BackToCategories,
    BackToQuestions(String),
}

impl CallbackAction {
    pub fn parse(data: &str) -> Self {
        if data == BACK_TO_CATEGORIES {
            return CallbackAction::BackToCategories;
        }
        match data.strip_prefix(BACK_TO_QUESTIONS_PREFIX) {
            Some(category) => CallbackAction::BackToQuestions(category.to_string()),
            None => CallbackAction::SelectCategory(data.to_string()),
        }
    }

    pub fn encode(&self) -> String {
        match self {
            CallbackAction::SelectCategory(category) => category.clone(),
            CallbackAction::BackToCategories => BACK_TO_CATEGORIES.to_string(),
            CallbackAction::BackToQuestions(category) => {
                format!("{BACK_TO_QUESTIONS_PREFIX}{category}")
            }
        }
    }

    /// The encoded payload, or `None` when Telegram would reject it as too long.
    pub fn to_callback_data(&self) -> Option<String> {
        let data = self.encode();
        (data.len() <= MAX_CALLBACK_DATA_LEN).then_some(data)
    }
}
