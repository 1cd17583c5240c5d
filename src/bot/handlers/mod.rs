pub mod callback;
pub mod general_message;
pub mod message;

use teloxide::{
    dispatching::UpdateHandler,
    prelude::*,
};

use crate::bot::replies::Reply;
use crate::services::{faq::FaqStore, session::SessionStore};

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

pub struct BotHandler {
    pub store: FaqStore,
    pub sessions: SessionStore,
}

impl BotHandler {
    pub fn new(store: FaqStore, sessions: SessionStore) -> Self {
        Self { store, sessions }
    }

    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        use teloxide::dispatching::UpdateFilterExt;

        let store_cmd = self.store.clone();
        let sessions_cmd = self.sessions.clone();
        let store_text = self.store.clone();
        let sessions_text = self.sessions.clone();
        let store_callback = self.store.clone();
        let sessions_callback = self.sessions.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: crate::bot::commands::Command| {
                        let store = store_cmd.clone();
                        let sessions = sessions_cmd.clone();
                        async move { message::command_handler(bot, msg, cmd, store, sessions).await }
                    }),
            )
            .branch(
                Update::filter_message()
                    .filter(|msg: Message| msg.text().is_some())
                    .endpoint(move |bot: Bot, msg: Message, me: teloxide::types::Me| {
                        let store = store_text.clone();
                        let sessions = sessions_text.clone();
                        async move { general_message::handle_text(bot, msg, me, store, sessions).await }
                    }),
            )
            .branch(Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
                let store = store_callback.clone();
                let sessions = sessions_callback.clone();
                async move { callback::callback_handler(bot, q, store, sessions).await }
            }))
    }
}

/// Sends `reply` to `chat_id`, attaching its inline keyboard when it has one.
pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> ResponseResult<Message> {
    let request = bot.send_message(chat_id, reply.text);
    match reply.keyboard {
        Some(keyboard) => request.reply_markup(keyboard).await,
        None => request.await,
    }
}
