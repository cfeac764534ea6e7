//! # Menu Date Module
//!
//! Date handling for the lunch-menu feed: "today" in the restaurant's civil
//! time zone, the Finnish reply header, and the flexible parser for the
//! several date encodings the feed has used over the years.

use chrono::{Datelike, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;

/// The restaurant lives in Helsinki; "today" is computed there, not on the
/// host clock.
pub const MENU_TIME_ZONE: Tz = chrono_tz::Europe::Helsinki;

/// Current date in the given civil time zone.
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Full Finnish weekday name, lowercase as Finnish convention has it.
pub fn finnish_weekday(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "maanantai",
        Weekday::Tue => "tiistai",
        Weekday::Wed => "keskiviikko",
        Weekday::Thu => "torstai",
        Weekday::Fri => "perjantai",
        Weekday::Sat => "lauantai",
        Weekday::Sun => "sunnuntai",
    }
}

/// `d.M.yyyy` with no zero padding on day or month.
pub fn render_date(date: NaiveDate) -> String {
    format!("{}.{}.{}", date.day(), date.month(), date.year())
}

/// Header line of every menu reply: weekday name plus the date.
pub fn render_header(date: NaiveDate) -> String {
    format!("{} {}", finnish_weekday(date), render_date(date))
}

/// Parse an upstream date string in any of the formats the feed is known to
/// emit. Returns `None` when nothing matches; callers skip the entry rather
/// than failing.
///
/// Tried in order: an embedded `T` (ISO datetime) truncates to the date
/// part first; then `d.M.yyyy` / `dd.MM.yyyy` (the old Amica feed), then
/// `yyyy-MM-dd` (the Compass feed), then a plain ISO parse as last resort.
pub fn parse_date_flexible(s: &str) -> Option<NaiveDate> {
    let mut t = s.trim();

    // "2025-09-03T00:00:00+03:00" -> "2025-09-03"
    if let Some(pos) = t.find('T') {
        if pos > 0 {
            t = &t[..pos];
        }
    }

    // chrono's numeric fields accept both padded and unpadded widths, so
    // one pattern covers d.M.yyyy and dd.MM.yyyy.
    for pattern in ["%d.%m.%Y", "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(t, pattern) {
            return Some(date);
        }
    }

    t.parse::<NaiveDate>().ok()
}
