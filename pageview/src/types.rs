//! Page content types mirroring the homepage API payload.
//!
//! The payload is consumed as-is: every field defaults when missing, so an
//! incomplete document still renders (empty text, empty sections) instead of
//! failing to decode. Unknown keys are ignored.
//!
//! # Example
//!
//! ```rust
//! use pageview_leptos::types::{Hero, Metric, PageContent};
//!
//! let content = PageContent {
//!     brand: "Acme".into(),
//!     hero: Hero {
//!         title: "Ship faster".into(),
//!         ..Default::default()
//!     },
//!     metrics: vec![Metric {
//!         label: "Uptime".into(),
//!         value: "99.9%".into(),
//!     }],
//!     ..Default::default()
//! };
//! assert_eq!(content.metrics.len(), 1);
//! ```

use serde::{de, Deserialize};
use serde_json::Value;

/// Complete content of the homepage, as returned by `GET /api/home`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageContent {
    /// Brand name shown in the top bar
    pub brand: String,
    /// Hero copy and call-to-action labels
    pub hero: Hero,
    /// Headline metrics, rendered as cards in order
    pub metrics: Vec<Metric>,
    /// Service offering cards
    pub service_pillars: Vec<ServicePillar>,
    /// Industry names, rendered as chips
    pub industries: Vec<String>,
    /// Case study cards
    pub case_studies: Vec<CaseStudy>,
    /// Short insight lines
    pub insights: Vec<String>,
    /// Last content update, as sent by the API (any date string)
    pub updated_at: String,
}

/// Hero section copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
    /// Main headline
    pub title: String,
    /// Supporting paragraph
    pub subtitle: String,
    /// Primary action label
    pub cta_primary: String,
    /// Secondary action label
    pub cta_secondary: String,
}

/// A single headline metric.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Metric {
    /// What is measured (unique within the page)
    pub label: String,
    /// Display value, already formatted by the API (e.g. "99.9%")
    pub value: String,
}

/// A service offering card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServicePillar {
    /// Card title (unique within the page)
    pub title: String,
    /// Card body
    pub description: String,
}

/// A case study card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CaseStudy {
    /// Client or project name (unique within the page)
    pub title: String,
    /// Outcome summary
    pub result: String,
}

/// Decode a raw response body into page content.
///
/// Returns `Ok(None)` when the body carries no data: an empty body, or a JSON
/// value a browser would treat as falsy (`null`, `false`, `0`, `""`).
/// Anything else must be a JSON object decoding into [`PageContent`],
/// otherwise the JSON error is returned.
pub fn decode_payload(body: &[u8]) -> Result<Option<PageContent>, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: Value = serde_json::from_slice(body)?;
    if is_falsy(&value) {
        return Ok(None);
    }
    if !value.is_object() {
        return Err(de::Error::custom("page content must be a JSON object"));
    }

    serde_json::from_value(value).map(Some)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
