//! Logger setup for the command-line binary

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle, opt_format};

use crate::{Error, Result};

/// Start logging to stderr.
///
/// `RUST_LOG` wins when set; otherwise `default_spec` (for example `"warn"`
/// or `"gameplan=debug"`) is used. Keep the returned handle alive for as long
/// as logging is needed.
///
/// # Errors
///
/// Returns [`Error::Logging`] if the log specification string is malformed or a logger is
/// already running.
pub fn init_logging(default_spec: &str) -> Result<LoggerHandle> {
    Logger::try_with_env_or_str(default_spec)
        .and_then(|logger| logger.log_to_stderr().format(opt_format).start())
        .map_err(|e: FlexiLoggerError| Error::Logging {
            message: e.to_string(),
        })
}
