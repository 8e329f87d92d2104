/// Polling loop for the console driver.
///
/// The daemon drives the collector and translator on a fixed cadence and
/// owns the single piece of state that survives across cycles: the
/// cumulative rain total used for the incremental rain computation. The
/// host consumes the loop through the `Iterator` contract — one normalized
/// record per cycle, forever — and stops it by simply not pulling the next
/// record. Nothing a console can do ends the stream; a dead console just
/// produces timestamp-only records until it comes back.

use chrono::Utc;
use log::{debug, info};
use std::thread;
use std::time::Duration;

use crate::collector::Collector;
use crate::config::DriverConfig;
use crate::fields;
use crate::model::{ConsoleError, Record};
use crate::translate;

// ---------------------------------------------------------------------------
// Cross-cycle state
// ---------------------------------------------------------------------------

/// State threaded across polling cycles.
///
/// The rain delta needs the previous cumulative total, and that is the only
/// thing any cycle remembers about the cycles before it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PollerState {
    /// Cumulative rain total from the most recent cycle that reported one.
    /// `None` until the first cycle with a Rainfall group.
    pub last_rain_total: Option<f64>,
}

impl PollerState {
    /// Carries the cumulative rain total forward from a finished cycle.
    /// Cycles without a total (failed fetch, no Rainfall group) leave the
    /// previous value in place.
    pub fn update_from(&mut self, record: &Record) {
        if let Some(total) = record.get_f64(fields::FIELD_RAIN_TOTAL) {
            self.last_rain_total = Some(total);
        }
    }
}

// ---------------------------------------------------------------------------
// Poller
// ---------------------------------------------------------------------------

/// Infinite source of normalized records, one per polling cycle.
pub struct Poller {
    collector: Collector,
    config: DriverConfig,
    state: PollerState,
    poll_interval: Duration,
    cycles: u64,
}

impl Poller {
    pub fn new(config: DriverConfig) -> Result<Self, ConsoleError> {
        info!("driver version is {}", crate::DRIVER_VERSION);
        info!("station address: {}", config.addr);

        let collector = Collector::new(&config)?;
        Ok(Self {
            collector,
            poll_interval: config.poll_interval(),
            config,
            state: PollerState::default(),
            cycles: 0,
        })
    }

    pub fn state(&self) -> PollerState {
        self.state
    }

    /// Runs one fetch/translate cycle without sleeping. Used by the
    /// iterator and by the one-shot diagnostic mode.
    pub fn poll_once(&mut self) -> Record {
        let doc = self.collector.fetch();
        debug!("data: {:?}", doc);

        let mut record = translate::translate(
            doc.as_ref(),
            self.state.last_rain_total,
            Utc::now(),
            self.config.unit_system,
        );
        self.state.update_from(&record);
        translate::apply_sensor_map(&mut record, &self.config.sensor_map);

        debug!("record: {:?}", record);
        record
    }
}

impl Iterator for Poller {
    type Item = Record;

    /// Never returns `None`. The inter-cycle sleep happens at the top of
    /// the call, so the host can stop the loop at any sleep boundary by
    /// dropping the iterator, and the first record arrives without delay.
    fn next(&mut self) -> Option<Record> {
        if self.cycles > 0 {
            thread::sleep(self.poll_interval);
        }
        self.cycles += 1;
        Some(self.poll_once())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::console::parse_status_response;
    use crate::ingest::fixtures::*;
    use crate::model::UnitSystem;

    #[test]
    fn test_state_starts_unknown() {
        assert_eq!(PollerState::default().last_rain_total, None);
    }

    #[test]
    fn test_state_tracks_reported_total() {
        let doc = parse_status_response(fixture_bound_cluster_json()).expect("should parse");
        let record = translate::translate(Some(&doc), None, Utc::now(), UnitSystem::Us);

        let mut state = PollerState::default();
        state.update_from(&record);
        assert_eq!(state.last_rain_total, Some(0.56));
    }

    #[test]
    fn test_state_survives_cycles_without_data() {
        let mut state = PollerState {
            last_rain_total: Some(10.65),
        };

        // Failed fetch: bare record, total must carry over untouched.
        let record = translate::translate(None, state.last_rain_total, Utc::now(), UnitSystem::Us);
        state.update_from(&record);
        assert_eq!(state.last_rain_total, Some(10.65));
    }

    #[test]
    fn test_two_cycle_sequence_emits_rain_on_second_cycle() {
        let mut state = PollerState::default();

        // First cycle: total becomes known, no delta yet.
        let doc = parse_status_response(fixture_bound_cluster_json()).expect("should parse");
        let first = translate::translate(Some(&doc), state.last_rain_total, Utc::now(), UnitSystem::Us);
        state.update_from(&first);
        assert!(first.get(fields::FIELD_RAIN).is_none());
        assert_eq!(state.last_rain_total, Some(0.56));

        // Second cycle: delta against the carried total.
        let doc = parse_status_response(fixture_rain_total_advanced_json()).expect("should parse");
        let second = translate::translate(Some(&doc), state.last_rain_total, Utc::now(), UnitSystem::Us);
        state.update_from(&second);

        let rain = second.get_f64(fields::FIELD_RAIN).expect("second cycle should emit rain");
        assert!((rain - 15.81).abs() < 1e-9, "16.37 - 0.56 should give 15.81, got {}", rain);
        assert_eq!(state.last_rain_total, Some(16.37));
    }

    #[test]
    fn test_poller_construction() {
        let poller = Poller::new(DriverConfig::default()).expect("poller should build");
        assert_eq!(poller.state(), PollerState::default());
    }
}
