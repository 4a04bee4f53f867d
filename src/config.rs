//! Runtime configuration.
//!
//! Defaults come from the environment (a `.env` file is loaded by the binary),
//! command line flags override them.

use crate::processing::PlanOptions;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Default log4rs configuration file.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// File name prefix for saved exports.
pub const EXPORT_FILE_PREFIX: &str = "vlsm_plan";

pub const ENV_ALLOW_P2P: &str = "VLSM_ALLOW_P2P";
pub const ENV_RESERVE_NETWORK_BROADCAST: &str = "VLSM_RESERVE_NETWORK_BROADCAST";
pub const ENV_LOG_CONFIG: &str = "VLSM_LOG_CONFIG";

/// Settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub allow_p2p: bool,
    pub reserve_network_broadcast: bool,
    pub log_config: String,
}

impl Default for Settings {
    fn default() -> Self {
        let options = PlanOptions::default();
        Settings {
            allow_p2p: options.allow_p2p,
            reserve_network_broadcast: options.reserve_network_broadcast,
            log_config: LOG_CONFIG_FILE.to_string(),
        }
    }
}

/// Parse a boolean env value; unknown text yields `None`.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Settings {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for missing or bad values.
    pub fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let flag = |key: &str, default: bool| match lookup(key) {
            Some(value) => parse_flag(&value).unwrap_or_else(|| {
                log::warn!("Ignoring invalid value '{value}' for {key}, using {default}");
                default
            }),
            None => default,
        };

        Settings {
            allow_p2p: flag(ENV_ALLOW_P2P, defaults.allow_p2p),
            reserve_network_broadcast: flag(
                ENV_RESERVE_NETWORK_BROADCAST,
                defaults.reserve_network_broadcast,
            ),
            log_config: lookup(ENV_LOG_CONFIG).unwrap_or(defaults.log_config),
        }
    }

    pub fn plan_options(&self) -> PlanOptions {
        PlanOptions {
            reserve_network_broadcast: self.reserve_network_broadcast,
            allow_p2p: self.allow_p2p,
        }
    }
}

/// Initialize log4rs from `path`, or a warn level stderr logger when the file is missing.
pub fn init_logging(path: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(path).exists() {
        log4rs::init_file(path, Default::default())?;
        log::info!("Logging configured from {path}");
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    log::debug!("Log config {path} not found, using stderr logger");
    Ok(())
}
