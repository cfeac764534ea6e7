//! # Message Handler Module
//!
//! Telegram transport glue: one inbound message in, at most one reply out.
//! All command semantics live in `commands::dispatch`; this layer only
//! moves text across the Telegram API.

use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use crate::commands::dispatch;
use crate::config::BotConfig;

/// Handle one incoming Telegram message. Non-text messages (photos,
/// stickers, ...) are ignored; the bot only speaks text.
pub async fn message_handler(bot: Bot, msg: Message, config: Arc<BotConfig>) -> Result<()> {
    if let Some(text) = msg.text() {
        info!("Received text message from chat {}: {}", msg.chat.id, text);

        let reply = dispatch(text, &config).await;
        bot.send_message(msg.chat.id, reply).await?;
    }

    Ok(())
}
