/// Field registry for the L7 console driver.
///
/// The console reports measurements as (label, reading, unit) tuples inside
/// titled sensor groups. This registry is the single source of truth for
/// which (group title, entry label) pairs land in the record and under what
/// name — the translator iterates it rather than hardcoding matches. Groups
/// and labels the console reports that are not listed here (Relative
/// pressure, Max Daily Gust, the 10-minute wind averages, ...) are silently
/// ignored, which keeps the driver compatible with console firmware that
/// adds fields.

// ---------------------------------------------------------------------------
// Field names referenced elsewhere by name
// ---------------------------------------------------------------------------

/// Cumulative rain since station reset, as reported by the console.
pub const FIELD_RAIN_TOTAL: &str = "rain_total";

/// Incremental rain since the previous cycle, derived by the translator.
pub const FIELD_RAIN: &str = "rain";

/// Battery status field. 0 = all sensors OK (host convention).
pub const FIELD_BATTERY: &str = "battery";

// ---------------------------------------------------------------------------
// Mapping registry
// ---------------------------------------------------------------------------

/// How a reading string parses into the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Float,
    Int,
}

/// One row of the console-to-record mapping.
pub struct FieldMapping {
    /// Sensor group title as reported by the console, e.g. "Rainfall".
    pub group: &'static str,
    /// Entry label within the group, e.g. "Total".
    pub label: &'static str,
    /// Output field name in the emitted record.
    pub field: &'static str,
    pub kind: FieldKind,
}

/// Every console reading the driver extracts.
///
/// Wind direction comes from the 2-minute average rather than the
/// instantaneous "Direction" entry; the console's instantaneous value is
/// noisy enough to be useless for archiving.
pub static FIELD_MAP: &[FieldMapping] = &[
    FieldMapping { group: "Indoor", label: "Temperature", field: "inTemp", kind: FieldKind::Float },
    FieldMapping { group: "Indoor", label: "Humidity", field: "inHumidity", kind: FieldKind::Int },
    FieldMapping { group: "Outdoor", label: "Temperature", field: "outTemp", kind: FieldKind::Float },
    FieldMapping { group: "Outdoor", label: "Humidity", field: "outHumidity", kind: FieldKind::Int },
    FieldMapping { group: "Pressure", label: "Absolute", field: "pressure", kind: FieldKind::Float },
    FieldMapping { group: "Wind Speed", label: "Wind", field: "windSpeed", kind: FieldKind::Float },
    FieldMapping { group: "Wind Speed", label: "Gust", field: "windGust", kind: FieldKind::Float },
    FieldMapping { group: "Wind Speed", label: "Direction Average 2 Minute", field: "windDir", kind: FieldKind::Float },
    FieldMapping { group: "Rainfall", label: "Rate", field: "rain_rate", kind: FieldKind::Float },
    FieldMapping { group: "Rainfall", label: "Hour", field: "rain_hour", kind: FieldKind::Float },
    FieldMapping { group: "Rainfall", label: "Day", field: "rain_day", kind: FieldKind::Float },
    FieldMapping { group: "Rainfall", label: "Week", field: "rain_week", kind: FieldKind::Float },
    FieldMapping { group: "Rainfall", label: "Month", field: "rain_month", kind: FieldKind::Float },
    FieldMapping { group: "Rainfall", label: "Year", field: "rain_year", kind: FieldKind::Float },
    FieldMapping { group: "Rainfall", label: "Total", field: FIELD_RAIN_TOTAL, kind: FieldKind::Float },
    FieldMapping { group: "Solar", label: "Light", field: "luminosity", kind: FieldKind::Float },
    FieldMapping { group: "Solar", label: "UVI", field: "UV", kind: FieldKind::Float },
];

/// Looks up the mapping that produces the given output field. Returns
/// `None` for derived fields (`rain`, `battery`) and unknown names.
pub fn find_mapping(field: &str) -> Option<&'static FieldMapping> {
    FIELD_MAP.iter().find(|m| m.field == field)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
