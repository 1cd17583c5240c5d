use teloxide::prelude::*;

use crate::bot::commands::Command;
use crate::bot::handlers::{send_reply, HandlerResult};
use crate::bot::replies::{self, Reply};
use crate::services::{faq::FaqStore, session::SessionStore};
use crate::utils::logging::log_command_start;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    store: FaqStore,
    sessions: SessionStore,
) -> HandlerResult {
    let (user_id, username) = match msg.from() {
        Some(user) => (user.id, user.username.clone().unwrap_or_else(|| "unknown".to_string())),
        None => return Ok(()),
    };

    let reply = match cmd {
        Command::Start => {
            log_command_start("start", &username, user_id.0, msg.chat.id.0, None);
            Reply::text(replies::WELCOME_TEXT)
        }
        Command::Help => {
            log_command_start("help", &username, user_id.0, msg.chat.id.0, None);
            Reply::text(replies::HELP_TEXT)
        }
        Command::Enroll => {
            log_command_start("enroll", &username, user_id.0, msg.chat.id.0, None);
            Reply::text(replies::ENROLL_TEXT)
        }
        Command::Faq(category) => {
            let category = category.trim();
            if category.is_empty() {
                log_command_start("faq", &username, user_id.0, msg.chat.id.0, None);
                replies::category_menu(&store).await
            } else {
                log_command_start("faq", &username, user_id.0, msg.chat.id.0, Some(category));
                replies::question_list(&store, &sessions, user_id, category).await
            }
        }
    };

    send_reply(&bot, msg.chat.id, reply).await?;
    Ok(())
}
