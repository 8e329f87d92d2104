/// Test fixtures: representative JSON payloads from the L7 console.
///
/// These reflect real console output from the status endpoint:
///   http://<addr>/client?command=record
///
/// Console response shape:
///   response.sensor[]
///     .title       — sensor group name ("Indoor", "Rainfall", ...)
///     .list[]      — [label, reading, unit] string tuples; Rainfall
///                    entries carry a fourth element (register index)
///     .range       — free-text range note on some groups
///   response.battery
///     .list[]      — bare status strings, e.g. "All battery are ok"
///
/// Note: readings are always JSON strings, even though they represent
/// numbers. Parsers must handle this. Which groups appear depends on
/// whether an outdoor sensor cluster is bound to the base console.

/// Console with no sensor cluster bound: only Indoor and Pressure report,
/// and there is no battery group. Exercises group absence handling.
#[cfg(test)]
pub(crate) fn fixture_unbound_console_json() -> &'static str {
    r#"{
      "sensor": [
        {
          "title": "Indoor",
          "list": [
            ["Temperature", "69.3", "F"],
            ["Humidity", "38", "%"]
          ]
        },
        {
          "title": "Pressure",
          "list": [
            ["Absolute", "30.04", "inhg"],
            ["Relative", "29.91", "inhg"]
          ]
        }
      ]
    }"#
}

/// Console bound to an outdoor sensor cluster: all six groups plus battery.
/// Includes every entry the real console sends, so unmapped labels
/// (Relative pressure, Max Daily Gust, the 10-minute wind averages) and the
/// Rainfall register indexes are exercised too.
#[cfg(test)]
pub(crate) fn fixture_bound_cluster_json() -> &'static str {
    r#"{
      "sensor": [
        {
          "title": "Indoor",
          "list": [
            ["Temperature", "57.4", "F"],
            ["Humidity", "81", "%"]
          ]
        },
        {
          "title": "Outdoor",
          "list": [
            ["Temperature", "54.7", "F"],
            ["Humidity", "94", "%"]
          ]
        },
        {
          "title": "Pressure",
          "list": [
            ["Absolute", "29.76", "inhg"],
            ["Relative", "29.52", "inhg"]
          ]
        },
        {
          "title": "Wind Speed",
          "list": [
            ["Max Daily Gust", "5.1", "mph"],
            ["Wind", "1.1", "mph"],
            ["Gust", "1.6", "mph"],
            ["Direction", "123", ""],
            ["Wind Average 2 Minute", "0.4", "mph"],
            ["Direction Average 2 Minute", "280", ""],
            ["Wind Average 10 Minute", "1.3", "mph"],
            ["Direction Average 10 Minute", "134", ""]
          ]
        },
        {
          "title": "Rainfall",
          "list": [
            ["Rate", "0.07", "inch/hr"],
            ["Hour", "0.02", "inch", "43"],
            ["Day", "0.14", "inch", "44"],
            ["Week", "0.56", "inch", "45"],
            ["Month", "0.56", "inch", "46"],
            ["Year", "0.56", "inch", "47"],
            ["Total", "0.56", "inch", "48"]
          ],
          "range": "Range: 0inch to 393.7inch."
        },
        {
          "title": "Solar",
          "list": [
            ["Light", "0.0", "w/"],
            ["UVI", "0.0", ""]
          ]
        }
      ],
      "battery": {
        "title": "Battery",
        "list": [
          "All battery are ok"
        ]
      }
    }"#
}

/// Rainfall-only document with an advanced cumulative total. Paired with
/// fixture_bound_cluster_json in rain delta tests: 0.56 there, 16.37 here.
#[cfg(test)]
pub(crate) fn fixture_rain_total_advanced_json() -> &'static str {
    r#"{
      "sensor": [
        {
          "title": "Rainfall",
          "list": [
            ["Rate", "0.31", "inch/hr"],
            ["Hour", "0.11", "inch", "43"],
            ["Day", "1.02", "inch", "44"],
            ["Week", "3.40", "inch", "45"],
            ["Month", "5.72", "inch", "46"],
            ["Year", "16.37", "inch", "47"],
            ["Total", "16.37", "inch", "48"]
          ],
          "range": "Range: 0inch to 393.7inch."
        }
      ]
    }"#
}

/// Battery group without the all-OK sentinel. The console only ever reports
/// an all-or-nothing status, so anything other than the exact sentinel must
/// leave the battery field unset rather than guessing an alarm code.
#[cfg(test)]
pub(crate) fn fixture_battery_low_json() -> &'static str {
    r#"{
      "sensor": [
        {
          "title": "Indoor",
          "list": [
            ["Temperature", "69.3", "F"],
            ["Humidity", "38", "%"]
          ]
        }
      ],
      "battery": {
        "title": "Battery",
        "list": [
          "Sensor battery is low"
        ]
      }
    }"#
}

/// Indoor temperature reading replaced by a non-numeric placeholder, as
/// seen while the console warms up. Only that field should drop; the
/// humidity next to it must still parse.
#[cfg(test)]
pub(crate) fn fixture_bad_reading_json() -> &'static str {
    r#"{
      "sensor": [
        {
          "title": "Indoor",
          "list": [
            ["Temperature", "--.-", "F"],
            ["Humidity", "38", "%"]
          ]
        }
      ]
    }"#
}
