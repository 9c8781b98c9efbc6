use crate::error::BarkError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INFO_HEX: &str = "#1982c4";
pub const DEFAULT_WARN_HEX: &str = "#ffca3a";
pub const DEFAULT_ERROR_HEX: &str = "#ff595e";
pub const DEFAULT_DEBUG_HEX: &str = "#ca7df9";
pub const DEFAULT_TIME_FORMAT: &str = "01/02 03:04:05PM";

/// Prefix for environment overrides, e.g. `BARK_INFO_HEX`.
const ENV_PREFIX: &str = "BARK";

/// User-supplied colors and timestamp layout. Empty fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarkOptions {
    pub info_hex: String,
    pub warn_hex: String,
    pub error_hex: String,
    pub debug_hex: String,
    pub time_format: String,
}

impl BarkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_info_hex(mut self, hex: impl Into<String>) -> Self {
        self.info_hex = hex.into();
        self
    }

    pub fn with_warn_hex(mut self, hex: impl Into<String>) -> Self {
        self.warn_hex = hex.into();
        self
    }

    pub fn with_error_hex(mut self, hex: impl Into<String>) -> Self {
        self.error_hex = hex.into();
        self
    }

    pub fn with_debug_hex(mut self, hex: impl Into<String>) -> Self {
        self.debug_hex = hex.into();
        self
    }

    pub fn with_time_format(mut self, layout: impl Into<String>) -> Self {
        self.time_format = layout.into();
        self
    }

    /// Load options from a config file, then overlay `BARK_*` environment variables.
    pub fn load(path: &str) -> Result<Self, BarkError> {
        let settings = Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load options from `BARK_*` environment variables only.
    pub fn from_env() -> Result<Self, BarkError> {
        let settings = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Fill every empty field from the defaults.
    pub fn merge(&self) -> EffectiveOptions {
        merge(self)
    }
}

/// Fully defaulted options used to build sinks. Read-only once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveOptions {
    info_hex: String,
    warn_hex: String,
    error_hex: String,
    debug_hex: String,
    time_format: String,
}

impl Default for EffectiveOptions {
    fn default() -> Self {
        Self {
            info_hex: DEFAULT_INFO_HEX.to_string(),
            warn_hex: DEFAULT_WARN_HEX.to_string(),
            error_hex: DEFAULT_ERROR_HEX.to_string(),
            debug_hex: DEFAULT_DEBUG_HEX.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl EffectiveOptions {
    pub fn info_hex(&self) -> &str {
        &self.info_hex
    }

    pub fn warn_hex(&self) -> &str {
        &self.warn_hex
    }

    pub fn error_hex(&self) -> &str {
        &self.error_hex
    }

    pub fn debug_hex(&self) -> &str {
        &self.debug_hex
    }

    pub fn time_format(&self) -> &str {
        &self.time_format
    }
}

fn pick(user: &str, default: &str) -> String {
    if user.is_empty() {
        default.to_string()
    } else {
        user.to_string()
    }
}

/// Merge user options over the defaults. Values are not validated.
pub fn merge(user: &BarkOptions) -> EffectiveOptions {
    EffectiveOptions {
        info_hex: pick(&user.info_hex, DEFAULT_INFO_HEX),
        warn_hex: pick(&user.warn_hex, DEFAULT_WARN_HEX),
        error_hex: pick(&user.error_hex, DEFAULT_ERROR_HEX),
        debug_hex: pick(&user.debug_hex, DEFAULT_DEBUG_HEX),
        time_format: pick(&user.time_format, DEFAULT_TIME_FORMAT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_color_comes_from_debug_field() {
        let merged = merge(&BarkOptions::new().with_debug_hex("#010203"));
        assert_eq!(merged.debug_hex(), "#010203");
        assert_eq!(merged.error_hex(), DEFAULT_ERROR_HEX);
    }

    #[test]
    fn test_method_and_function_agree() {
        let opts = BarkOptions::new().with_time_format("15:04");
        assert_eq!(opts.merge(), merge(&opts));
    }
}
