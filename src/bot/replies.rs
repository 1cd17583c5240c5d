//! Builds the text and keyboard of every bot reply.
//!
//! Nothing here talks to Telegram; handlers send whatever [`Reply`] comes back.

use std::num::IntErrorKind;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, UserId};

use crate::services::{faq::FaqStore, session::SessionStore};
use crate::utils::callback_data::CallbackAction;
use crate::utils::logging::{log_database_error, log_validation_error};

pub const WELCOME_TEXT: &str = "Welcome to EnroLLAI! Type /help to see available commands.";
pub const HELP_TEXT: &str = "Here are the available commands:\n\
    /enroll - Get information about enrollment\n\
    /faq - Get answers to frequently asked questions\n";
pub const ENROLL_TEXT: &str = "To enroll in an Italian university:\n\
    1️⃣ Choose a university and program.\n\
    2️⃣ Prepare your documents (passport, diploma, transcript, etc.).\n\
    3️⃣ Apply through Universitaly or directly on the university website.\n\
    4️⃣ Wait for admission results and apply for a visa.\n\
    Need help? Ask me!";

pub const CHOOSE_CATEGORY: &str = "Please choose a category:";
pub const NO_CATEGORIES: &str = "No FAQ categories are available right now.";
pub const NO_QUESTIONS: &str = "No questions found in this category.";
pub const STORE_UNAVAILABLE: &str =
    "Sorry, the FAQ is temporarily unavailable. Please try again later.";
pub const ENTER_VALID_NUMBER: &str = "Please enter a valid number.";
pub const SELECT_CATEGORY_FIRST: &str = "Please select a category first using /faq.";
pub const INVALID_QUESTION_NUMBER: &str = "Invalid question number. Please try again.";
pub const UNKNOWN_COMMAND: &str = "Unknown command. Use /help to see available commands.";

pub const BACK_TO_CATEGORIES_LABEL: &str = "Back to Categories";
pub const BACK_TO_QUESTIONS_LABEL: &str = "Back to Questions";

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<InlineKeyboardMarkup>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(text: impl Into<String>, keyboard: InlineKeyboardMarkup) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}

/// One button per row, labelled and keyed by category. Categories whose payload
/// Telegram would reject are left out.
pub async fn category_menu(store: &FaqStore) -> Reply {
    let categories = match store.categories().await {
        Ok(categories) => categories,
        Err(e) => {
            log_database_error("SELECT DISTINCT category", "faq", &e.to_string(), None);
            return Reply::text(STORE_UNAVAILABLE);
        }
    };

    let rows: Vec<Vec<InlineKeyboardButton>> = categories
        .into_iter()
        .filter_map(|category| {
            let Some(data) = CallbackAction::SelectCategory(category.clone()).to_callback_data() else {
                tracing::warn!("Category '{}' is too long for a button, skipping", category);
                return None;
            };
            Some(vec![InlineKeyboardButton::callback(category, data)])
        })
        .collect();

    if rows.is_empty() {
        return Reply::text(NO_CATEGORIES);
    }

    Reply::with_keyboard(CHOOSE_CATEGORY, InlineKeyboardMarkup::new(rows))
}

/// `"1. first\n2. second"`, numbered from 1.
pub fn numbered_questions(questions: &[String]) -> String {
    questions
        .iter()
        .enumerate()
        .map(|(i, question)| format!("{}. {}", i + 1, question))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Records `category` as the user's selection and lists its questions.
pub async fn question_list(
    store: &FaqStore,
    sessions: &SessionStore,
    user_id: UserId,
    category: &str,
) -> Reply {
    sessions.select_category(user_id, category).await;

    let questions = match store.questions(category).await {
        Ok(questions) => questions,
        Err(e) => {
            log_database_error("SELECT question", "faq", &e.to_string(), Some(category));
            return Reply::text(STORE_UNAVAILABLE);
        }
    };

    if questions.is_empty() {
        return Reply::text(NO_QUESTIONS);
    }

    let text = format!(
        "Here are the questions in the '{}' category:\n{}\n\nSend me the question number to get the answer.",
        category,
        numbered_questions(&questions)
    );
    let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        BACK_TO_CATEGORIES_LABEL,
        CallbackAction::BackToCategories.encode(),
    )]]);

    Reply::with_keyboard(text, keyboard)
}

/// Answers the question numbered `input` in the user's selected category.
pub async fn answer_by_number(
    store: &FaqStore,
    sessions: &SessionStore,
    user_id: UserId,
    input: &str,
) -> Reply {
    // `None` is a well-formed integer too large for i64: always out of range.
    let number: Option<i64> = match input.trim().parse::<i64>() {
        Ok(number) => Some(number),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => None,
        Err(_) => {
            log_validation_error("answer", input, "not a number", user_id.0);
            return Reply::text(ENTER_VALID_NUMBER);
        }
    };

    let Some(category) = sessions.selected_category(user_id).await else {
        return Reply::text(SELECT_CATEGORY_FIRST);
    };

    let questions = match store.questions(&category).await {
        Ok(questions) => questions,
        Err(e) => {
            log_database_error("SELECT question", "faq", &e.to_string(), Some(&category));
            return Reply::text(STORE_UNAVAILABLE);
        }
    };

    if questions.is_empty() {
        return Reply::text(NO_QUESTIONS);
    }

    let question = number
        .and_then(|n| usize::try_from(n).ok())
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| questions.get(index));
    let Some(question) = question else {
        log_validation_error("answer", input, "question number out of range", user_id.0);
        return Reply::text(INVALID_QUESTION_NUMBER);
    };

    let answer = unescape_newlines(&store.answer_for(question).await);

    match CallbackAction::BackToQuestions(category).to_callback_data() {
        Some(data) => Reply::with_keyboard(
            answer,
            InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
                BACK_TO_QUESTIONS_LABEL,
                data,
            )]]),
        ),
        None => Reply::text(answer),
    }
}

/// Reply to an inline button press carrying `data`.
pub async fn callback_reply(
    store: &FaqStore,
    sessions: &SessionStore,
    user_id: UserId,
    data: &str,
) -> Reply {
    match CallbackAction::parse(data) {
        CallbackAction::BackToCategories => category_menu(store).await,
        CallbackAction::SelectCategory(category) | CallbackAction::BackToQuestions(category) => {
            question_list(store, sessions, user_id, &category).await
        }
    }
}

/// Answers are stored with literal `\n` sequences; Telegram needs real newlines.
pub fn unescape_newlines(answer: &str) -> String {
    answer.replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_questions_start_at_one() {
        let questions = vec!["Q1".to_string(), "Q2".to_string()];
        assert_eq!(numbered_questions(&questions), "1. Q1\n2. Q2");
    }

    #[test]
    fn test_numbered_questions_empty() {
        assert_eq!(numbered_questions(&[]), "");
    }

    #[test]
    fn test_unescape_newlines() {
        assert_eq!(unescape_newlines("Step one.\\nStep two."), "Step one.\nStep two.");
        assert_eq!(unescape_newlines("No escapes"), "No escapes");
    }

    #[test]
    fn test_help_lists_both_commands() {
        assert!(HELP_TEXT.contains("/enroll"));
        assert!(HELP_TEXT.contains("/faq"));
    }
}
