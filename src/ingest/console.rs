/// Raddy L7 console status client.
///
/// Handles URL construction and JSON response parsing for the console's
/// status endpoint:
///   http://<addr>/client?command=record
///
/// The console returns a list of titled sensor groups, each holding
/// (label, reading, unit) tuples — Rainfall entries carry a fourth element —
/// plus a separate battery status group. Which groups appear depends on
/// whether an outdoor sensor cluster is bound to the base console, so every
/// part of the document is optional: a missing group means "no readings for
/// those sensors this cycle", never an error. See `fixtures.rs` for
/// annotated examples of both the bound and unbound shapes.

use crate::model::ConsoleError;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde structures for the console JSON document
// ---------------------------------------------------------------------------

/// Top-level status document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub sensor: Vec<SensorGroup>,
    pub battery: Option<BatteryGroup>,
}

/// A titled cluster of related readings, e.g. "Indoor" or "Rainfall".
#[derive(Debug, Clone, Deserialize)]
pub struct SensorGroup {
    pub title: String,
    /// Measurement entries as raw string tuples. Readings are strings even
    /// when they represent numbers; parsers must handle this.
    #[serde(default)]
    pub list: Vec<Vec<String>>,
    /// Free-text range note attached to some groups, e.g.
    /// "Range: 0inch to 393.7inch.". Carried but unused.
    pub range: Option<String>,
}

/// Battery status group. Unlike sensor groups, its list holds bare strings.
#[derive(Debug, Clone, Deserialize)]
pub struct BatteryGroup {
    pub title: Option<String>,
    #[serde(default)]
    pub list: Vec<String>,
}

impl StatusResponse {
    /// Looks up a sensor group by its exact title.
    pub fn group(&self, title: &str) -> Option<&SensorGroup> {
        self.sensor.iter().find(|g| g.title == title)
    }
}

impl SensorGroup {
    /// Returns the reading string for the entry with the given label.
    ///
    /// Entries shorter than two elements (no reading) are skipped; extra
    /// trailing elements are ignored.
    pub fn reading(&self, label: &str) -> Option<&str> {
        self.list
            .iter()
            .find(|entry| entry.first().map(String::as_str) == Some(label))
            .and_then(|entry| entry.get(1))
            .map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds the status URL for a console address.
///
/// # Example
/// ```
/// use l7_driver::ingest::console::build_status_url;
///
/// let url = build_status_url("192.168.5.1");
/// assert_eq!(url, "http://192.168.5.1/client?command=record");
/// ```
pub fn build_status_url(addr: &str) -> String {
    format!("http://{}/client?command=record", addr)
}

// ---------------------------------------------------------------------------
// Fetch and parse
// ---------------------------------------------------------------------------

/// Performs a single GET of the status document.
///
/// # Errors
/// - `ConsoleError::HttpError` — connection failure, timeout, or non-2xx
///   status.
/// - `ConsoleError::ParseError` — response body is not a valid status
///   document.
pub fn fetch_status(
    client: &reqwest::blocking::Client,
    addr: &str,
) -> Result<StatusResponse, ConsoleError> {
    let url = build_status_url(addr);
    log::debug!("fetching {}", url);

    let response = client.get(&url).send()?;
    if !response.status().is_success() {
        return Err(ConsoleError::HttpError(format!(
            "console returned HTTP {}",
            response.status()
        )));
    }

    let body = response.text()?;
    parse_status_response(&body)
}

/// Parses a status document body.
pub fn parse_status_response(json: &str) -> Result<StatusResponse, ConsoleError> {
    serde_json::from_str(json)
        .map_err(|e| ConsoleError::ParseError(format!("JSON deserialization failed: {}", e)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::fixtures::*;

    // --- URL construction ---------------------------------------------------

    #[test]
    fn test_build_status_url_uses_record_command() {
        let url = build_status_url("192.168.5.1");
        assert_eq!(url, "http://192.168.5.1/client?command=record");
    }

    #[test]
    fn test_build_status_url_accepts_hostname() {
        let url = build_status_url("weatherstation.local");
        assert_eq!(url, "http://weatherstation.local/client?command=record");
    }

    // --- Parsing: happy path ------------------------------------------------

    #[test]
    fn test_parse_unbound_console_document() {
        let doc = parse_status_response(fixture_unbound_console_json())
            .expect("unbound console fixture should parse");

        // Console without a bound sensor cluster reports only Indoor and
        // Pressure.
        assert_eq!(doc.sensor.len(), 2);
        assert!(doc.group("Indoor").is_some());
        assert!(doc.group("Pressure").is_some());
        assert!(doc.group("Outdoor").is_none(), "no cluster bound, no Outdoor group");
        assert!(doc.battery.is_none());
    }

    #[test]
    fn test_parse_bound_cluster_document() {
        let doc = parse_status_response(fixture_bound_cluster_json())
            .expect("bound cluster fixture should parse");

        assert_eq!(doc.sensor.len(), 6, "bound console reports all six groups");

        let indoor = doc.group("Indoor").expect("should have Indoor group");
        assert_eq!(indoor.reading("Temperature"), Some("57.4"));
        assert_eq!(indoor.reading("Humidity"), Some("81"));

        let battery = doc.battery.as_ref().expect("should have battery group");
        assert_eq!(battery.list.first().map(String::as_str), Some("All battery are ok"));
    }

    #[test]
    fn test_parse_rainfall_entries_with_fourth_element() {
        // Rainfall entries carry a fourth element (an internal register
        // index). The reading lookup must still return the second element.
        let doc = parse_status_response(fixture_bound_cluster_json())
            .expect("bound cluster fixture should parse");

        let rainfall = doc.group("Rainfall").expect("should have Rainfall group");
        assert_eq!(rainfall.reading("Total"), Some("0.56"));
        assert_eq!(rainfall.reading("Year"), Some("0.56"));
        assert!(
            rainfall.range.as_deref().is_some_and(|r| r.starts_with("Range:")),
            "range note should survive parsing"
        );
    }

    #[test]
    fn test_reading_lookup_misses_unknown_label() {
        let doc = parse_status_response(fixture_bound_cluster_json())
            .expect("bound cluster fixture should parse");

        let indoor = doc.group("Indoor").expect("should have Indoor group");
        assert_eq!(indoor.reading("Dew Point"), None);
    }

    #[test]
    fn test_reading_lookup_skips_short_entries() {
        let group = SensorGroup {
            title: "Indoor".to_string(),
            list: vec![vec!["Temperature".to_string()]],
            range: None,
        };
        assert_eq!(
            group.reading("Temperature"),
            None,
            "entry without a reading element should yield nothing"
        );
    }

    // --- Parsing: error and edge cases --------------------------------------

    #[test]
    fn test_parse_malformed_body_returns_parse_error() {
        let result = parse_status_response("{ this is not valid json }}}");
        assert!(
            matches!(result, Err(ConsoleError::ParseError(_))),
            "malformed JSON should return ParseError, got {:?}",
            result
        );
    }

    #[test]
    fn test_parse_empty_body_returns_parse_error() {
        let result = parse_status_response("");
        assert!(matches!(result, Err(ConsoleError::ParseError(_))));
    }

    #[test]
    fn test_parse_empty_object_is_a_valid_empty_document() {
        // A console mid-reboot can answer with an empty object; that is a
        // document with no groups, not a parse failure.
        let doc = parse_status_response("{}").expect("empty object should parse");
        assert!(doc.sensor.is_empty());
        assert!(doc.battery.is_none());
    }

    #[test]
    fn test_parse_tolerates_unknown_top_level_keys() {
        let doc = parse_status_response(r#"{"sensor":[],"firmware":"1.3.9"}"#)
            .expect("unknown keys should be ignored");
        assert!(doc.sensor.is_empty());
    }
}
