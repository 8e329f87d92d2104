/// Shared data types for the L7 console driver.
///
/// Everything here is host-facing: the normalized `Record` emitted once per
/// polling cycle, the loosely-typed `Value` its fields carry, the declared
/// unit system tag, and the driver error taxonomy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Unit system
// ---------------------------------------------------------------------------

/// Unit system declared on every emitted record.
///
/// The console reports in US customary units (°F, inHg, mph, inch), so `Us`
/// is the default. The host applies its own conversion policy downstream;
/// this tag only declares what the raw values mean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Us,
    Metric,
}

// ---------------------------------------------------------------------------
// Measurement values
// ---------------------------------------------------------------------------

/// A single measurement value in a record.
///
/// The console reports every reading as a string; the field registry decides
/// whether it parses as a float (temperatures, rain) or an integer
/// (humidities, battery status).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Float(f64),
    Int(i64),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Float(v) => Some(*v as i64),
        }
    }
}

// ---------------------------------------------------------------------------
// Normalized record
// ---------------------------------------------------------------------------

/// Flat measurement record produced once per polling cycle.
///
/// A record always carries a timestamp and a unit system tag; measurement
/// fields are present only when the console reported them this cycle and
/// they parsed cleanly. Records fully replace each other cycle to cycle —
/// nothing is merged across cycles except the carried-forward rain total,
/// which the daemon tracks separately.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "dateTime", with = "chrono::serde::ts_seconds")]
    pub date_time: DateTime<Utc>,
    #[serde(rename = "usUnits")]
    pub unit_system: UnitSystem,
    #[serde(flatten)]
    pub values: BTreeMap<String, Value>,
}

impl Record {
    /// Creates a bare record: timestamp and unit system, no measurements.
    pub fn new(date_time: DateTime<Utc>, unit_system: UnitSystem) -> Self {
        Self {
            date_time,
            unit_system,
            values: BTreeMap::new(),
        }
    }

    pub fn set_float(&mut self, field: &str, value: f64) {
        self.values.insert(field.to_string(), Value::Float(value));
    }

    pub fn set_int(&mut self, field: &str, value: i64) {
        self.values.insert(field.to_string(), Value::Int(value));
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Numeric accessor used for fields that may be stored as either kind.
    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.values.get(field).and_then(Value::as_f64)
    }

    /// Number of measurement fields (timestamp and unit tag not counted).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Driver error taxonomy.
///
/// `HttpError` covers connection failures, timeouts, and non-2xx statuses;
/// `ParseError` covers malformed response bodies. Both degrade to "no data
/// this cycle" at the collector boundary — neither ever reaches the host
/// through the record stream. `ConfigError` is the only variant surfaced at
/// startup.
#[derive(Debug)]
pub enum ConsoleError {
    HttpError(String),
    ParseError(String),
    ConfigError(String),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            ConsoleError::ParseError(msg) => write!(f, "parse error: {}", msg),
            ConsoleError::ConfigError(msg) => write!(f, "config error: {}", msg),
        }
    }
}

impl std::error::Error for ConsoleError {}

impl From<reqwest::Error> for ConsoleError {
    fn from(e: reqwest::Error) -> Self {
        ConsoleError::HttpError(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_conversions() {
        let float_val = Value::Float(57.4);
        assert_eq!(float_val.as_f64(), Some(57.4));
        assert_eq!(float_val.as_i64(), Some(57));

        let int_val = Value::Int(81);
        assert_eq!(int_val.as_i64(), Some(81));
        assert_eq!(int_val.as_f64(), Some(81.0));
    }

    #[test]
    fn test_new_record_is_bare() {
        let record = Record::new(Utc::now(), UnitSystem::Us);
        assert!(record.is_empty(), "fresh record should carry no measurements");
        assert_eq!(record.unit_system, UnitSystem::Us);
    }

    #[test]
    fn test_record_field_accessors() {
        let mut record = Record::new(Utc::now(), UnitSystem::Us);
        record.set_float("outTemp", 54.7);
        record.set_int("outHumidity", 94);

        assert_eq!(record.get("outTemp"), Some(&Value::Float(54.7)));
        assert_eq!(record.get_f64("outHumidity"), Some(94.0));
        assert_eq!(record.len(), 2);
        assert!(record.get("inTemp").is_none(), "unset field should be absent");
    }

    #[test]
    fn test_record_serializes_with_weewx_style_keys() {
        let ts = DateTime::from_timestamp(1_714_567_890, 0).expect("valid timestamp");
        let mut record = Record::new(ts, UnitSystem::Us);
        record.set_float("inTemp", 57.4);
        record.set_int("battery", 0);

        let json = serde_json::to_string(&record).expect("record should serialize");
        assert!(json.contains("\"dateTime\":1714567890"), "got: {}", json);
        assert!(json.contains("\"usUnits\":\"us\""), "got: {}", json);
        assert!(json.contains("\"inTemp\":57.4"), "got: {}", json);
        assert!(json.contains("\"battery\":0"), "got: {}", json);
    }

    #[test]
    fn test_unit_system_deserializes_from_lowercase() {
        let us: UnitSystem = serde_json::from_str("\"us\"").expect("us should parse");
        let metric: UnitSystem = serde_json::from_str("\"metric\"").expect("metric should parse");
        assert_eq!(us, UnitSystem::Us);
        assert_eq!(metric, UnitSystem::Metric);
    }

    #[test]
    fn test_console_error_display() {
        let err = ConsoleError::ParseError("bad body".to_string());
        assert!(err.to_string().contains("bad body"));
    }
}
