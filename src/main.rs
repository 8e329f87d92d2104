//! L7 Weather Station Driver - Standalone Runner
//!
//! Direct interface to the L7 driver, for diagnostics and standalone use.
//! By default it fetches one status document from the console and prints
//! both the raw data and the derived record to stdout.
//!
//! Usage:
//!   cargo run --release                          # one-shot diagnostic fetch
//!   cargo run --release -- --addr 192.168.5.1    # target a specific console
//!   cargo run --release -- --poll                # run the polling loop
//!   cargo run --release -- --version             # print driver version
//!
//! Environment:
//!   RUST_LOG - log filter (--debug forces debug level)

use chrono::Utc;
use l7_driver::collector::Collector;
use l7_driver::config::DriverConfig;
use l7_driver::daemon::Poller;
use l7_driver::translate;
use l7_driver::{DRIVER_NAME, DRIVER_VERSION};
use std::env;
use std::process;

fn main() {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut addr: Option<String> = None;
    let mut config_path: Option<String> = None;
    let mut debug = false;
    let mut run_loop = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" => {
                println!("{} driver version {}", DRIVER_NAME, DRIVER_VERSION);
                return;
            }
            "--debug" => {
                debug = true;
                i += 1;
            }
            "--poll" => {
                run_loop = true;
                i += 1;
            }
            "--addr" => {
                if i + 1 < args.len() {
                    addr = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --addr requires an address");
                    process::exit(1);
                }
            }
            "--config" => {
                if i + 1 < args.len() {
                    config_path = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --config requires a path");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!(
                    "Usage: {} [--addr ADDR] [--config PATH] [--debug] [--poll] [--version]",
                    args[0]
                );
                process::exit(1);
            }
        }
    }

    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    // Config file if given, defaults otherwise; --addr wins over both.
    let mut config = match config_path {
        Some(path) => match DriverConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path, e);
                process::exit(1);
            }
        },
        None => DriverConfig::default(),
    };
    if let Some(addr) = addr {
        config.addr = addr;
    }

    if run_loop {
        run_polling_loop(config);
    } else {
        run_diagnostic(config);
    }
}

/// Runs the driver the way a host would: pull records off the poller
/// forever, printing each one.
fn run_polling_loop(config: DriverConfig) {
    let poller = match Poller::new(config) {
        Ok(poller) => poller,
        Err(e) => {
            eprintln!("Failed to start driver: {}", e);
            process::exit(1);
        }
    };

    for record in poller {
        match serde_json::to_string(&record) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to render record: {}", e),
        }
    }
}

/// One-shot diagnostic: fetch a single status document and show both the
/// raw console output and the derived record.
fn run_diagnostic(config: DriverConfig) {
    let collector = match Collector::new(&config) {
        Ok(collector) => collector,
        Err(e) => {
            eprintln!("Failed to start driver: {}", e);
            process::exit(1);
        }
    };

    println!("polling console at {}", collector.addr());
    let doc = collector.fetch();
    match &doc {
        Some(doc) => println!("data: {:?}", doc),
        None => println!("data: (no response from console)"),
    }

    let mut record = translate::translate(doc.as_ref(), None, Utc::now(), config.unit_system);
    translate::apply_sensor_map(&mut record, &config.sensor_map);
    match serde_json::to_string(&record) {
        Ok(json) => println!("record: {}", json),
        Err(e) => eprintln!("Failed to render record: {}", e),
    }
}
