/// Status document → normalized record translation.
///
/// This is the pure core of the driver: given the most recent status
/// document (or none, when the fetch failed) and the cumulative rain total
/// carried over from the previous cycle, produce the flat record handed to
/// the host. Translation is atomic — the whole record is built before the
/// caller sees it — and total: any document, however sparse or damaged,
/// yields a well-formed record.

use chrono::{DateTime, Utc};
use log::debug;
use std::collections::HashMap;

use crate::fields::{self, FieldKind, FIELD_MAP};
use crate::ingest::console::StatusResponse;
use crate::model::{Record, UnitSystem};

/// Exact battery status string the console reports when every bound sensor
/// checks in healthy. The console provides no per-sensor detail, so the
/// driver only ever emits the all-OK code (0); any other status leaves the
/// battery field unset.
pub const BATTERY_OK_STATUS: &str = "All battery are ok";

/// Translates a status document into a normalized record.
///
/// Field extraction walks `fields::FIELD_MAP`; groups the console did not
/// report this cycle are skipped, as are labels missing within a group and
/// readings that fail to parse numerically (each costs only its own field).
///
/// Incremental rain is derived from consecutive cumulative totals: with
/// `last_rain_total = Some(10.65)` and a reported Total of 16.37, the
/// record carries `rain = 5.72`. When `last_rain_total` is `None` — first
/// cycle, or the previous cycle had no data — `rain` is omitted entirely
/// rather than computed against an arbitrary baseline, which would show up
/// as a spurious rain spike.
pub fn translate(
    doc: Option<&StatusResponse>,
    last_rain_total: Option<f64>,
    now: DateTime<Utc>,
    unit_system: UnitSystem,
) -> Record {
    let mut record = Record::new(now, unit_system);
    let Some(doc) = doc else {
        return record;
    };

    for mapping in FIELD_MAP {
        let Some(group) = doc.group(mapping.group) else {
            continue;
        };
        let Some(reading) = group.reading(mapping.label) else {
            continue;
        };
        match mapping.kind {
            FieldKind::Float => match reading.parse::<f64>() {
                Ok(value) => record.set_float(mapping.field, value),
                Err(_) => debug!(
                    "dropping {}: unparseable {} reading '{}'",
                    mapping.field, mapping.label, reading
                ),
            },
            FieldKind::Int => match reading.parse::<i64>() {
                Ok(value) => record.set_int(mapping.field, value),
                Err(_) => debug!(
                    "dropping {}: unparseable {} reading '{}'",
                    mapping.field, mapping.label, reading
                ),
            },
        }
    }

    if let (Some(previous), Some(current)) =
        (last_rain_total, record.get_f64(fields::FIELD_RAIN_TOTAL))
    {
        record.set_float(fields::FIELD_RAIN, current - previous);
    }

    if let Some(battery) = &doc.battery {
        if battery.list.first().map(String::as_str) == Some(BATTERY_OK_STATUS) {
            record.set_int(fields::FIELD_BATTERY, 0);
        }
    }

    record
}

/// Renames record fields per the host-supplied sensor map. Applied at emit
/// time, after any internal state has been read off the record, so renaming
/// `rain_total` does not break the delta computation.
pub fn apply_sensor_map(record: &mut Record, sensor_map: &HashMap<String, String>) {
    for (from, to) in sensor_map {
        if let Some(value) = record.values.remove(from) {
            record.values.insert(to.clone(), value);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
