use crate::blocking::BlocklistFormat;
use crate::error::ConfigError;
use crate::report::{DEFAULT_BAD_LABEL, DEFAULT_GOOD_LABEL, VerdictLabels};

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Upper bound for worker threads used by parallel checking
pub const MAX_WORKERS: usize = 256;

/// Log target for the end-of-run query summary
pub const SUMMARY_TARGET: &str = "summary";

#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,

    /// Lowercase and strip trailing dots from input domains
    pub normalize: bool,

    /// Worker threads for checking queries (0 or 1 = sequential)
    pub workers: usize,

    /// Format used for `--blocklist` files
    pub blocklist_format: BlocklistFormat,

    /// Label printed for forbidden domains
    pub bad_label: String,

    /// Label printed for allowed domains
    pub good_label: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            normalize: false,
            workers: 0,
            blocklist_format: BlocklistFormat::DomainList,
            bad_label: DEFAULT_BAD_LABEL.to_string(),
            good_label: DEFAULT_GOOD_LABEL.to_string(),
        }
    }
}

impl CheckerConfig {
    /// Create a CheckerConfig from environment variables
    /// Returns Err if a variable is present but invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(log_level) = lookup("DOMAIN_CHECKER_LOG_LEVEL") {
            config.log_level = log_level.trim().to_lowercase();
        }

        if let Some(normalize) = lookup("DOMAIN_CHECKER_NORMALIZE") {
            config.normalize = parse_bool(&normalize, false);
        }

        if let Some(workers) = lookup("DOMAIN_CHECKER_WORKERS") {
            config.workers = workers
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidWorkers(workers))?;
        }

        if let Some(format) = lookup("DOMAIN_CHECKER_FORMAT") {
            config.blocklist_format = BlocklistFormat::parse_str(format.trim())
                .ok_or(ConfigError::InvalidFormat(format))?;
        }

        if let Some(bad_label) = lookup("DOMAIN_CHECKER_BAD_LABEL") {
            config.bad_label = bad_label;
        }

        if let Some(good_label) = lookup("DOMAIN_CHECKER_GOOD_LABEL") {
            config.good_label = good_label;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }

        if self.workers > MAX_WORKERS {
            return Err(ConfigError::InvalidWorkers(format!(
                "{} (max {})",
                self.workers, MAX_WORKERS
            )));
        }

        for label in [&self.bad_label, &self.good_label] {
            if label.is_empty() || label.contains('\n') {
                return Err(ConfigError::InvalidLabel(label.clone()));
            }
        }

        if self.bad_label == self.good_label {
            return Err(ConfigError::InvalidLabel(format!(
                "bad and good labels are both {:?}",
                self.bad_label
            )));
        }

        Ok(())
    }

    /// Log filter used when `RUST_LOG` is not set. With `summary` the
    /// summary target is raised to `info` whatever the base level.
    pub fn log_filter(&self, summary: bool) -> String {
        if summary {
            format!("{},{}=info", self.log_level, SUMMARY_TARGET)
        } else {
            self.log_level.clone()
        }
    }

    pub fn labels(&self) -> VerdictLabels {
        VerdictLabels {
            bad: self.bad_label.clone(),
            good: self.good_label.clone(),
        }
    }
}

/// Parse a boolean from a string, with a default value for invalid input
fn parse_bool(s: &str, default: bool) -> bool {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => default,
    }
}
