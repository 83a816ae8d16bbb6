// logging.rs

use crate::config::get_config;
use crate::errors::{CharlaError, CharlaResult};
use flexi_logger::{FileSpec, Logger};

/// Starts the file logger. The terminal itself belongs to the TUI, so log
/// output goes to `charla.log` in the working directory instead of stderr.
pub fn init() -> CharlaResult<()> {
    Logger::try_with_env_or_str(&get_config().log_level)
        .map_err(|e| CharlaError::config_error(format!("invalid log spec: {}", e)))?
        .log_to_file(FileSpec::default().basename("charla").suppress_timestamp())
        .append()
        .start()
        .map_err(|e| CharlaError::config_error(format!("failed to start logger: {}", e)))?;
    Ok(())
}
