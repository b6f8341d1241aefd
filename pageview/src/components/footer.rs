//! Page footer and the `updatedAt` display format.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use leptos::prelude::*;

/// Text shown when `updatedAt` cannot be parsed as a date.
pub const INVALID_DATE: &str = "Invalid Date";

/// Browser-style `toLocaleString()` layout (en-US).
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Date-times with a numeric offset RFC 3339 rejects (`+0200`).
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Zone-less date-time layouts, read as wall-clock time in the display offset.
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Static attribution plus the last content update.
#[component]
pub fn PageFooter(updated_at: String, utc_offset: FixedOffset) -> impl IntoView {
    let updated_label = format_updated_at(&updated_at, utc_offset);

    view! {
        <footer>
            <p>
                "Rendered with Leptos from the homepage content API. Last updated: "
                <span class="updated-at">{updated_label}</span>
            </p>
        </footer>
    }
}

/// Format an API timestamp for display in `utc_offset`.
///
/// Accepts RFC 3339 timestamps, date-times with a `+hhmm` offset, zone-less
/// date-times with a `T` or space separator (taken as wall-clock time in
/// `utc_offset`) and bare `YYYY-MM-DD` dates (UTC midnight). Anything else
/// yields [`INVALID_DATE`].
///
/// ```rust
/// use chrono::{Offset, Utc};
/// use pageview_leptos::components::format_updated_at;
///
/// let label = format_updated_at("2024-01-01T00:00:00Z", Utc.fix());
/// assert_eq!(label, "1/1/2024, 12:00:00 AM");
/// ```
pub fn format_updated_at(raw: &str, utc_offset: FixedOffset) -> String {
    match parse_timestamp(raw.trim(), utc_offset) {
        Some(instant) => instant
            .with_timezone(&utc_offset)
            .format(DISPLAY_FORMAT)
            .to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_timestamp(raw: &str, utc_offset: FixedOffset) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }

    for layout in OFFSET_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(raw, layout) {
            return Some(instant.with_timezone(&Utc));
        }
    }

    for layout in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, layout) {
            return naive
                .and_local_timezone(utc_offset)
                .single()
                .map(|instant| instant.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
