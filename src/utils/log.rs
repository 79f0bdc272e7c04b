// src/utils/log.rs

//! Logging setup for applications embedding the codec.
//!
//! The library itself logs through the `log` facade (`debug!` for table and
//! container sizes, `trace!` for individual codes). Hosts that have no logger
//! of their own can install a `tracing-subscriber` formatter here, which also
//! picks up `log` records.
//!
//! ```no_run
//! huffpack::utils::log::init_subscriber(tracing::Level::DEBUG).unwrap();
//! let packed = huffpack::encode(b"hello").unwrap();
//! ```

use crate::utils::error::{HuffError, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub use log::{debug, error, info, trace, warn};

/// Initializes a global logging subscriber writing to standard error.
///
/// Call once at program start. Fails if a global subscriber or logger has
/// already been installed.
pub fn init_subscriber(max_level: Level) -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| HuffError::Logger(e.to_string()))
}
