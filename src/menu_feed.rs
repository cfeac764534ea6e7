//! # Menu Feed Resolver Module
//!
//! Orchestrates fetch → decode → normalize → render for the `/foodmenu`
//! command. The chat transport has no way to show a thrown error, so this
//! module's outward contract is a total function: every internal failure is
//! flattened into the reply string at this one boundary.

use chrono::NaiveDate;
use log::{error, info};
use serde_json::Value;

use crate::config::BotConfig;
use crate::http_fetch::fetch_text;
use crate::menu_dates::{render_header, today_in, MENU_TIME_ZONE};
use crate::menu_schema::{extract_items_for_today, MenuExtraction};

/// Characters of raw feed text echoed back in diagnostics.
const RAW_PREFIX_CHARS: usize = 200;

/// Resolve today's lunch menu into a chat reply. Never fails: transport,
/// decompression, JSON and schema problems all render as an apologetic
/// message under the date header.
pub async fn resolve_today_menu(config: &BotConfig) -> String {
    let today = today_in(MENU_TIME_ZONE);
    let mut reply = render_header(today);

    match fetch_text(&config.client, &config.menu_feed_url).await {
        Ok(document) => {
            info!(
                "Fetched menu feed ({} bytes, content-encoding {:?})",
                document.text.len(),
                document.content_encoding
            );
            reply.push_str(&render_menu_body(&document.text, today));
        }
        Err(err) => {
            error!("Menu feed fetch failed: {err}");
            reply.push_str(&format!("\nVirhe ruokalistan hakemisessa: {err}"));
        }
    }

    reply
}

/// Render the part of the reply below the header from the decoded feed
/// text. Returns an empty string for a found-but-empty menu day.
pub fn render_menu_body(text: &str, today: NaiveDate) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "\nVirhe: tyhjä vastaus palvelimelta.".to_string();
    }

    let parsed: Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(err) => return format!("\nVirhe ruokalistan hakemisessa: {err}"),
    };

    if !parsed.is_object() {
        return format!(
            "\nVirhe: JSON-juuri ei ole objekti. Alku: {}",
            raw_prefix(trimmed)
        );
    }

    match extract_items_for_today(&parsed, today) {
        MenuExtraction::Items(items) => {
            let mut body = String::new();
            for item in items {
                body.push_str("\n - ");
                body.push_str(&item);
            }
            body
        }
        MenuExtraction::NoMenuToday => "\nEi ruokalistaa tälle päivälle.".to_string(),
        MenuExtraction::UnknownFormat => format!(
            "\nVirhe: tuntematon JSON-muoto (puuttuu MenusForDays/LunchMenus). Raaka JSON alku: {}",
            raw_prefix(trimmed)
        ),
    }
}

/// Bounded echo of untrusted input, cut on a char boundary.
fn raw_prefix(s: &str) -> String {
    s.chars().take(RAW_PREFIX_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 3).unwrap()
    }

    /// Test the happy path rendering of item lines
    #[test]
    fn test_body_renders_item_lines() {
        let text = r#"{
            "MenusForDays": [
                { "Date": "2025-09-03", "SetMenus": [ { "Components": ["Keitto", "Leipä"] } ] }
            ]
        }"#;

        assert_eq!(render_menu_body(text, today()), "\n - Keitto\n - Leipä");
    }

    /// Test the fixed notice when the feed has no entry for today
    #[test]
    fn test_body_no_menu_notice() {
        let text = r#"{ "MenusForDays": [ { "Date": "2025-09-01" } ] }"#;
        assert_eq!(
            render_menu_body(text, today()),
            "\nEi ruokalistaa tälle päivälle."
        );
    }

    /// Test that an array root yields a bounded diagnostic, not a panic
    #[test]
    fn test_body_array_root_diagnostic() {
        let text = "[1, 2, 3]";
        let body = render_menu_body(text, today());
        assert!(body.contains("JSON-juuri ei ole objekti"));
        assert!(body.contains("[1, 2, 3]"));
    }

    /// Test that the raw echo is bounded to roughly 200 characters
    #[test]
    fn test_body_diagnostic_is_bounded() {
        let huge = format!("[{}9]", "9,".repeat(5000));
        let body = render_menu_body(&huge, today());
        // header-free body: diagnostic prefix + 200 chars of input at most
        assert!(body.len() < 300);
    }

    /// Test malformed JSON renders as a fetch-error message
    #[test]
    fn test_body_malformed_json() {
        let body = render_menu_body("{ not json", today());
        assert!(body.starts_with("\nVirhe ruokalistan hakemisessa:"));
    }

    /// Test the empty-response notice
    #[test]
    fn test_body_empty_response() {
        assert_eq!(
            render_menu_body("   ", today()),
            "\nVirhe: tyhjä vastaus palvelimelta."
        );
    }

    /// Test the unknown-format notice carries a prefix of the raw document
    #[test]
    fn test_body_unknown_format() {
        let text = r#"{ "Days": [] }"#;
        let body = render_menu_body(text, today());
        assert!(body.contains("tuntematon JSON-muoto"));
        assert!(body.contains("\"Days\""));
    }

    /// Test a found day with no set menus renders just the header
    #[test]
    fn test_body_empty_day_is_blank() {
        let text = r#"{ "MenusForDays": [ { "Date": "2025-09-03" } ] }"#;
        assert_eq!(render_menu_body(text, today()), "");
    }
}
