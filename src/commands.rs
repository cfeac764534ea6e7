//! # Command Dispatcher Module
//!
//! Maps inbound chat text to exactly one reply. Parsing and execution are
//! split: [`Command::parse`] turns text into a tagged variant (pure,
//! testable), and [`dispatch`] runs the matching handler. Every input maps
//! to some reply; there is no unmatched state.

use chrono::Utc;

use crate::config::BotConfig;
use crate::menu_dates::MENU_TIME_ZONE;
use crate::menu_feed::resolve_today_menu;
use crate::weather::current_weather;

pub const ADD_USAGE: &str = "Usage: /add <number> <number>, e.g. /add 5 2";
pub const UNKNOWN_REPLY: &str = "I do not understand.";
const STUB_REPLY: &str = "I can tell you that when that feature is implemented.";
const JOKE_REPLY: &str = "Kyllä. Siitä saa kicksejä!";

/// One recognized command, tagged form of the fixed command table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/add a b` with both operand tokens still unparsed.
    Add(String, String),
    /// `/add` with the wrong number of tokens.
    AddUsage,
    Joke,
    FetchPauline,
    JukkaPayment,
    Weather,
    FoodMenu,
    Time,
    Unknown,
}

impl Command {
    /// Classify inbound text. Exact, case-sensitive matching on the trimmed
    /// text; only `/add` takes arguments.
    pub fn parse(text: &str) -> Command {
        let trimmed = text.trim();

        if trimmed.starts_with("/add") {
            let parts: Vec<&str> = trimmed.split_whitespace().collect();
            return match parts.as_slice() {
                [_, a, b] => Command::Add((*a).to_string(), (*b).to_string()),
                _ => Command::AddUsage,
            };
        }

        match trimmed {
            "/onko ohjelmointi kivaa?" => Command::Joke,
            "/who will fetch pauline today?" => Command::FetchPauline,
            "/when did jukka pay?" => Command::JukkaPayment,
            "/weather" => Command::Weather,
            "/foodmenu" => Command::FoodMenu,
            "/time" => Command::Time,
            _ => Command::Unknown,
        }
    }
}

/// Route inbound text to its handler and produce the reply. Total: every
/// text yields exactly one reply string.
pub async fn dispatch(text: &str, config: &BotConfig) -> String {
    match Command::parse(text) {
        Command::Add(a, b) => eval_add(&a, &b),
        Command::AddUsage => ADD_USAGE.to_string(),
        Command::Joke => JOKE_REPLY.to_string(),
        Command::FetchPauline | Command::JukkaPayment => STUB_REPLY.to_string(),
        Command::Weather => current_weather(config).await,
        Command::FoodMenu => resolve_today_menu(config).await,
        Command::Time => current_time_reply(),
        Command::Unknown => UNKNOWN_REPLY.to_string(),
    }
}

/// Sum two operand tokens. Exact integer arithmetic is preferred; decimals
/// are the fallback, and a whole-number decimal sum is rendered without a
/// fractional suffix. Both parse failures are expected outcomes, not errors.
fn eval_add(a: &str, b: &str) -> String {
    if let (Ok(x), Ok(y)) = (a.parse::<i64>(), b.parse::<i64>()) {
        return (x + y).to_string();
    }

    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => {
            let sum = x + y;
            if sum.fract() == 0.0 {
                format!("{}", sum as i64)
            } else {
                sum.to_string()
            }
        }
        _ => ADD_USAGE.to_string(),
    }
}

fn current_time_reply() -> String {
    let now = Utc::now().with_timezone(&MENU_TIME_ZONE);
    format!("Aika nyt: {}", now.format("%Y-%m-%dT%H:%M:%S"))
}
