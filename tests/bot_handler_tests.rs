mod common;

use common::create_seeded_store;
use enrollai_faq_bot::bot::handlers::BotHandler;
use enrollai_faq_bot::services::session::SessionStore;

#[tokio::test]
async fn test_handler_schema_builds() {
    let (store, _temp_dir) = create_seeded_store().await;
    let sessions = SessionStore::default();

    let handler = BotHandler::new(store, sessions.clone());

    // Building the dispatcher tree must not panic or touch the sessions
    let _schema = handler.schema();
    assert!(sessions.is_empty().await);
}

#[tokio::test]
async fn test_handler_shares_session_store() {
    let (store, _temp_dir) = create_seeded_store().await;
    let sessions = SessionStore::default();
    let handler = BotHandler::new(store, sessions.clone());

    handler.sessions.select_category(teloxide::types::UserId(1), "Visas").await;

    assert_eq!(
        sessions.selected_category(teloxide::types::UserId(1)).await,
        Some("Visas".to_string())
    );
}
