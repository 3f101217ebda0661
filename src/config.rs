//! Start-up configuration: environment and logging.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

/// Environment variable naming the log4rs YAML file.
pub const LOG_CONFIG_ENV: &str = "CIDR_TOOLS_LOG_CONFIG";

/// Default log4rs YAML file, relative to the working directory.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Path of the log4rs config file, from the environment or the default.
pub fn log_config_path() -> String {
    std::env::var(LOG_CONFIG_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string())
}

/// Fallback config: warnings and errors to stderr, stdout stays clean.
pub fn default_log_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}

/// Load `.env` and initialize log4rs.
///
/// Uses the YAML file from [`log_config_path`] when it loads, the
/// [`default_log_config`] otherwise.
pub fn init() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let path = log_config_path();
    if log4rs::init_file(&path, Default::default()).is_err() {
        log4rs::init_config(default_log_config()?)?;
        log::debug!("log config {path} not loaded, using stderr defaults");
    }
    Ok(())
}
