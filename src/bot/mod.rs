/// Command definitions parsed from `/command` messages
pub mod commands;
/// Dispatcher schema and Telegram-facing endpoints
pub mod handlers;
/// Reply texts and keyboards, independent of the Telegram transport
pub mod replies;
