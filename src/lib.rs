/// l7_driver: data collector for the Raddy L7 LoRa weather station console.
///
/// The console serves a JSON status document over HTTP on its local
/// network. This crate polls that endpoint, translates the document into a
/// flat record of named measurements, and hands the host application an
/// infinite iterator of records — the host owns persistence, archiving,
/// and unit conversion policy.
///
/// # Module structure
///
/// ```text
/// l7_driver
/// ├── model       — shared data types (Record, Value, UnitSystem, ConsoleError)
/// ├── fields      — fixed sensor-group → record-field mapping registry
/// ├── config      — driver configuration loader (driver.toml)
/// ├── ingest
/// │   └── console — console status endpoint: URL construction + JSON parsing
/// ├── translate   — status document → normalized record translation
/// ├── collector   — bounded-retry fetch of the status document
/// └── daemon      — polling loop yielding one record per cycle
/// ```

/// Public modules
pub mod collector;
pub mod config;
pub mod daemon;
pub mod fields;
pub mod ingest;
pub mod model;
pub mod translate;

pub const DRIVER_NAME: &str = "L7";
pub const DRIVER_VERSION: &str = env!("CARGO_PKG_VERSION");
