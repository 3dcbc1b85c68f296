//! All Telegram-specific functionality

pub mod bot;
pub mod command;
pub mod handler;
pub mod response_builder;

// Re-export main types for convenience
pub use bot::TelegramBot;
pub use command::Command;
