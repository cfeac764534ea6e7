use anyhow::Result;
use log::info;
use std::env;
use std::sync::Arc;
use teloxide::prelude::*;

use inarabot::bot;
use inarabot::config::BotConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    info!("Starting Inara Telegram Bot");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Get bot token from environment
    let bot_token = env::var("TELEGRAM_BOT_TOKEN").expect("TELEGRAM_BOT_TOKEN must be set");

    // Upstream endpoints and the shared HTTP client
    let config = Arc::new(BotConfig::from_env()?);

    // Initialize the bot
    let bot = Bot::new(bot_token);

    info!("Bot initialized, starting dispatcher");

    // Set up the dispatcher with the shared configuration
    let handler = dptree::entry().branch(Update::filter_message().endpoint({
        let config = Arc::clone(&config);
        move |bot: Bot, msg: Message| {
            let config = Arc::clone(&config);
            async move { bot::message_handler(bot, msg, config).await }
        }
    }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
