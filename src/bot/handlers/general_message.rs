use teloxide::prelude::*;
use teloxide::types::Me;

use crate::bot::commands::Command;
use crate::bot::handlers::{message, send_reply, HandlerResult};
use crate::bot::replies::{self, Reply};
use crate::services::{faq::FaqStore, session::SessionStore};

/// Plain text is read as a question number. Commands in unexpected case
/// (`/FAQ`) are still dispatched; anything else starting with `/` gets a hint.
pub async fn handle_text(
    bot: Bot,
    msg: Message,
    me: Me,
    store: FaqStore,
    sessions: SessionStore,
) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let Some(user) = msg.from() else {
        return Ok(());
    };

    if let Some(cmd) = Command::parse_ignoring_case(text, me.username()) {
        return message::command_handler(bot, msg, cmd, store, sessions).await;
    }

    let reply = if text.starts_with('/') {
        tracing::debug!(
            "Unknown command '{}' from user {}",
            text.split_whitespace().next().unwrap_or(text),
            user.id.0
        );
        Reply::text(replies::UNKNOWN_COMMAND)
    } else {
        replies::answer_by_number(&store, &sessions, user.id, text).await
    };

    send_reply(&bot, msg.chat.id, reply).await?;
    Ok(())
}
