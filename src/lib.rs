//! # EnroLLAI FAQ Bot
//!
//! A Telegram bot answering frequently asked questions for prospective
//! university enrollees.
//!
//! ## Features
//! - Static `/start`, `/help` and `/enroll` guides
//! - `/faq` category picker with numbered question lists
//! - Answers looked up by question number per user
//! - `POST /webhook` fulfillment endpoint for Dialogflow-style integrations
//! - SQLite or PostgreSQL FAQ store

/// Bot command handlers and reply building
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database connection, migrations and the FAQ table
pub mod database;
/// FAQ store, sessions, webhook and health services
pub mod services;
/// Logging helpers and callback payload encoding
pub mod utils;
