#![doc(
  html_playground_url = "https://play.rust-lang.org/",
  test(no_crate_inject, attr(deny(warnings)))
)]
//! Shared pieces of the item builder workspace. Nothing in here knows what an
//! item is: this crate handles host versions, chat formatting codes, nbt tags,
//! the config file, and logging.

#[macro_use]
extern crate log;

#[cfg(feature = "host")]
use log::LevelFilter;

pub mod config;
pub mod nbt;
pub mod util;
pub mod version;

pub use config::{Config, ConfigError};
pub use version::{FeatureFlags, Version, VersionSource};

/// Initializes logger. Might do more things in the future.
pub fn init(name: &str) {
  #[cfg(feature = "host")]
  {
    init_with_level(name, LevelFilter::Info);
  }
  #[cfg(not(feature = "host"))]
  {
    let _ = name;
  }
}

/// Installs the stdout logger with the given max level. This can only be
/// called once per process. Any later calls are ignored, as a plugin host may
/// have already installed its own logger. Returns true if this call installed
/// the logger.
#[cfg(feature = "host")]
pub fn init_with_level(name: &str, level: LevelFilter) -> bool {
  use log::{Metadata, Record};

  struct Logger {
    level: LevelFilter,
  }

  impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= self.level }

    fn log(&self, record: &Record) {
      if self.enabled(record.metadata()) {
        #[cfg(feature = "utclogs")]
        let now = chrono::Utc::now();
        #[cfg(not(feature = "utclogs"))]
        let now = chrono::Local::now();
        print!("{} ", now.format("%Y-%m-%d %H:%M:%S%.3f"));
        #[cfg(debug_assertions)]
        {
          if let Some(path) = record.module_path() {
            print!("{path}");
          }
          if let Some(line) = record.line() {
            print!(":{line}");
          }
          print!(" ");
        }
        use log::Level;
        match record.level() {
          Level::Trace => print!("[\x1b[36mTRACE\x1b[0m]"),
          Level::Debug => print!("[\x1b[34mDEBUG\x1b[0m]"),
          Level::Info => print!("[\x1b[32mINFO\x1b[0m]"),
          Level::Warn => print!("[\x1b[33mWARN\x1b[0m]"),
          Level::Error => print!("[\x1b[31m\x1b[1mERROR\x1b[0m]"),
        }
        println!(" {}", record.args());
      }
    }

    fn flush(&self) {}
  }

  let logger = Box::new(Logger { level });
  match log::set_boxed_logger(logger) {
    Ok(()) => {
      log::set_max_level(level);
      debug!("logger initialized for {name}");
      true
    }
    Err(_) => {
      debug!("logger already set, not initializing one for {name}");
      false
    }
  }
}
