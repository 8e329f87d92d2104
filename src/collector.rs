/// Bounded-retry collector for the console status document.
///
/// Wraps the single-shot fetch in `ingest::console` with the retry policy:
/// up to `max_tries` attempts per cycle, a fixed wait between failed
/// attempts, and degradation to "no data" once retries are exhausted. A
/// failed cycle is observable only in the log — the caller always gets a
/// clean `Option`.

use log::error;
use std::thread;
use std::time::Duration;

use crate::config::DriverConfig;
use crate::ingest::console::{self, StatusResponse};
use crate::model::ConsoleError;

pub struct Collector {
    addr: String,
    max_tries: u32,
    retry_wait: Duration,
    client: reqwest::blocking::Client,
}

impl Collector {
    /// Builds a collector for the configured console, including the HTTP
    /// client with the per-attempt timeout.
    pub fn new(config: &DriverConfig) -> Result<Self, ConsoleError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ConsoleError::HttpError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            addr: config.addr.clone(),
            max_tries: config.max_tries,
            retry_wait: config.retry_wait(),
            client,
        })
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Fetches the status document, retrying transport and parse failures
    /// alike. Returns `None` once retries are exhausted; the caller treats
    /// that exactly like an empty response for this cycle.
    pub fn fetch(&self) -> Option<StatusResponse> {
        let wait = self.retry_wait;
        fetch_with_retry(
            self.max_tries,
            |_| console::fetch_status(&self.client, &self.addr),
            || thread::sleep(wait),
        )
    }
}

/// Retry engine behind `Collector::fetch`, parameterized over the attempt
/// and backoff actions so the policy can be exercised without a console on
/// the network.
///
/// Each failed attempt is logged; the backoff runs only between attempts,
/// so a first-try success costs no delay and the last failure is not
/// followed by one. The exhausted-retries line is logged exactly once.
pub(crate) fn fetch_with_retry<T, A, B>(max_tries: u32, mut attempt: A, mut backoff: B) -> Option<T>
where
    A: FnMut(u32) -> Result<T, ConsoleError>,
    B: FnMut(),
{
    for try_number in 1..=max_tries {
        match attempt(try_number) {
            Ok(doc) => return Some(doc),
            Err(e) => {
                error!("failed attempt {} of {} to get data: {}", try_number, max_tries, e);
                if try_number < max_tries {
                    backoff();
                }
            }
        }
    }
    error!("failed to get data after {} tries", max_tries);
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
