use anyhow::{Context, Result};
use bark::BarkOptions;

/// Color and layout flags given on the command line.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub info_hex: Option<String>,
    pub warn_hex: Option<String>,
    pub error_hex: Option<String>,
    pub debug_hex: Option<String>,
    pub time_format: Option<String>,
}

/// Options from `path` (plus `BARK_*` variables), or from the environment alone.
pub fn load_options(path: Option<&str>) -> Result<BarkOptions> {
    match path {
        Some(path) => {
            BarkOptions::load(path).with_context(|| format!("Failed to load config from {path}"))
        }
        None => BarkOptions::from_env().context("Failed to read BARK_* environment"),
    }
}

impl Overrides {
    /// Non-empty flags replace the loaded values.
    pub fn apply(self, mut options: BarkOptions) -> BarkOptions {
        let fields = [
            (self.info_hex, &mut options.info_hex),
            (self.warn_hex, &mut options.warn_hex),
            (self.error_hex, &mut options.error_hex),
            (self.debug_hex, &mut options.debug_hex),
            (self.time_format, &mut options.time_format),
        ];

        for (flag, slot) in fields {
            if let Some(value) = flag.filter(|v| !v.is_empty()) {
                *slot = value;
            }
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_loaded_values() {
        let loaded = BarkOptions::new()
            .with_info_hex("#111111")
            .with_warn_hex("#222222");
        let overrides = Overrides {
            info_hex: Some("#abcabc".to_string()),
            time_format: Some("15:04".to_string()),
            ..Default::default()
        };

        let merged = overrides.apply(loaded);

        assert_eq!(merged.info_hex, "#abcabc");
        assert_eq!(merged.warn_hex, "#222222");
        assert_eq!(merged.time_format, "15:04");
        assert!(merged.debug_hex.is_empty());
    }

    #[test]
    fn test_empty_flags_are_ignored() {
        let loaded = BarkOptions::new().with_error_hex("#333333");
        let overrides = Overrides {
            error_hex: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(overrides.apply(loaded).error_hex, "#333333");
    }
}
