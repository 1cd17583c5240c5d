//! # EnroLLAI FAQ Bot Main Entry Point
//!
//! Initializes logging, loads configuration, connects the FAQ store, starts
//! the session sweeper, and runs the Telegram bot next to the webhook server.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use enrollai_faq_bot::bot::handlers::BotHandler;
use enrollai_faq_bot::config::{self, Config};
use enrollai_faq_bot::database::connection::DatabaseManager;
use enrollai_faq_bot::services::{
    self,
    faq::FaqStore,
    session::SessionStore,
    session_sweeper::SessionSweeper,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "enrollai_faq_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    config::load_env_files();
    let config = Config::from_env()?;

    info!("Starting EnroLLAI FAQ Bot v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Database: {}, HTTP Port: {}",
        config::mask_url(&config.database_url), config.http_port);

    // Initialize database
    info!("Initializing database connection...");
    let db_manager = DatabaseManager::new(&config.database_url).await?;
    db_manager.run_migrations().await?;
    info!("Database initialized successfully ({})", db_manager.backend());

    let store = FaqStore::new(db_manager);
    let sessions = SessionStore::new(config.session_ttl);

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let handler = BotHandler::new(store.clone(), sessions.clone());
    info!("Telegram bot initialized successfully");

    let mut session_sweeper = match SessionSweeper::new(sessions.clone()).await {
        Ok(sweeper) => sweeper,
        Err(e) => {
            tracing::error!("Failed to create session sweeper: {}", e);
            return Err(anyhow::anyhow!("Failed to create session sweeper: {}", e));
        }
    };

    if let Err(e) = session_sweeper.start().await {
        tracing::error!("Failed to start session sweeper: {}", e);
    }

    let router = services::http_router(store);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Webhook server starting on port {}", config.http_port);

    // Run both the bot and the HTTP server concurrently
    let bot_task = tokio::spawn(async move {
        info!("Bot is running!");
        Dispatcher::builder(bot, handler.schema())
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let http_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("HTTP server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result = bot_task => {
            if let Err(e) = result {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result = http_task => {
            if let Err(e) = result {
                tracing::error!("HTTP task error: {}", e);
            }
        }
    }

    if let Err(e) = session_sweeper.stop().await {
        tracing::warn!("Error stopping session sweeper: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
