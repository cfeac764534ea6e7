//! # Menu Schema Module
//!
//! Normalizes the menu feed's JSON into a flat list of item names for one
//! date. The feed has shipped several incompatible shapes over the years
//! (`MenusForDays` vs `LunchMenus` day lists, `Components` vs `Meals` vs a
//! bare `Name` per set menu), so extraction tries an ordered list of
//! strategies and takes the first that applies. Structural mismatches
//! degrade to empty results, never errors.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::menu_dates::parse_date_flexible;

/// Outcome of extracting one day's items from a parsed feed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuExtraction {
    /// The day was found; the list is in document order and may be empty.
    Items(Vec<String>),
    /// The day list parsed but held no entry for the requested date.
    NoMenuToday,
    /// Neither known day-list field was present as an array.
    UnknownFormat,
}

/// Extract the menu items for `today` from a parsed feed document.
///
/// Scans the day list in order and commits to the first entry whose date
/// parses to `today`; any later entry for the same date is deliberately
/// ignored.
pub fn extract_items_for_today(root: &Value, today: NaiveDate) -> MenuExtraction {
    // Newer Compass shape first, then the legacy field.
    let days = root
        .get("MenusForDays")
        .and_then(Value::as_array)
        .or_else(|| root.get("LunchMenus").and_then(Value::as_array));
    let Some(days) = days else {
        return MenuExtraction::UnknownFormat;
    };

    for day in days {
        let Some(day) = day.as_object() else { continue };

        let date = day
            .get("Date")
            .and_then(plain_string)
            .and_then(|s| parse_date_flexible(&s));
        if date != Some(today) {
            continue;
        }

        let mut items = Vec::new();
        if let Some(set_menus) = day.get("SetMenus").and_then(Value::as_array) {
            for set_menu in set_menus {
                if let Some(set_menu) = set_menu.as_object() {
                    items.extend(extract_set_menu_items(set_menu));
                }
            }
        }
        return MenuExtraction::Items(items);
    }

    MenuExtraction::NoMenuToday
}

/// Extraction strategies in priority order; the first that applies to a set
/// menu wins for that entry. Siblings are matched independently, so one
/// entry may use `Components` while the next falls back to `Meals`.
const STRATEGIES: [fn(&Map<String, Value>) -> Option<Vec<String>>; 3] =
    [components_items, meals_items, set_menu_name];

fn extract_set_menu_items(set_menu: &Map<String, Value>) -> Vec<String> {
    for strategy in STRATEGIES {
        if let Some(items) = strategy(set_menu) {
            return items;
        }
    }
    Vec::new()
}

/// Newer shape: `"Components": ["Lohikeitto (L,G)", "Ruisleipä", ...]`.
fn components_items(set_menu: &Map<String, Value>) -> Option<Vec<String>> {
    let components = set_menu.get("Components")?.as_array()?;
    if components.is_empty() {
        return None;
    }
    Some(components.iter().filter_map(plain_string).collect())
}

/// Older shape: `"Meals": [{"Name": "..."}, ...]`. Non-object members are
/// kept via their literal string form.
fn meals_items(set_menu: &Map<String, Value>) -> Option<Vec<String>> {
    let meals = set_menu.get("Meals")?.as_array()?;
    if meals.is_empty() {
        return None;
    }
    let mut items = Vec::new();
    for meal in meals {
        match meal.as_object() {
            Some(meal) => {
                if let Some(name) = meal.get("Name").and_then(plain_string) {
                    if !name.is_empty() {
                        items.push(name);
                    }
                }
            }
            None => {
                if let Some(literal) = plain_string(meal) {
                    items.push(literal);
                }
            }
        }
    }
    Some(items)
}

/// Last resort: the set menu's own `Name` field.
fn set_menu_name(set_menu: &Map<String, Value>) -> Option<Vec<String>> {
    let name = set_menu.get("Name").and_then(plain_string)?;
    if name.is_empty() {
        return None;
    }
    Some(vec![name])
}

/// Render a JSON value the way the feed's free-text fields are meant to be
/// read: strings without their quotes, other scalars via their JSON form,
/// nulls dropped.
fn plain_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
