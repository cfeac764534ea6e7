//! Bot module for handling Telegram interactions
//!
//! - `message_handler`: routes incoming text messages through the command
//!   dispatcher and sends the reply back to the originating chat

pub mod message_handler;

// Re-export main handler function for use in main.rs
pub use message_handler::message_handler;
