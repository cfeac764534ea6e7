//! # Inara Telegram Bot
//!
//! A Telegram bot that answers a small set of fixed text commands, fetches
//! the day's cafeteria lunch menu from the Compass Group JSON feed, and
//! reports the current weather for Helsinki.

pub mod bot;
pub mod commands;
pub mod config;
pub mod feed_errors;
pub mod http_fetch;
pub mod menu_dates;
pub mod menu_feed;
pub mod menu_schema;
pub mod weather;
