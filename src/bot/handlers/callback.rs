use teloxide::prelude::*;

use crate::bot::handlers::{send_reply, HandlerResult};
use crate::bot::replies;
use crate::services::{faq::FaqStore, session::SessionStore};
use crate::utils::logging::log_callback;

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    store: FaqStore,
    sessions: SessionStore,
) -> HandlerResult {
    // Telegram shows a spinner on the button until the query is answered.
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };

    let user_id = q.from.id;
    let username = q.from.username.as_deref().unwrap_or("unknown");
    let chat_id = q
        .message
        .as_ref()
        .map(|m| m.chat.id)
        .unwrap_or(ChatId(user_id.0 as i64));
    log_callback(data, username, user_id.0, chat_id.0);

    let reply = replies::callback_reply(&store, &sessions, user_id, data).await;

    send_reply(&bot, chat_id, reply).await?;
    Ok(())
}
