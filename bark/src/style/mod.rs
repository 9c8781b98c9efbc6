//! Label styling for each severity.

pub mod time_layout;

pub use time_layout::TimeLayout;

use crate::config::EffectiveOptions;
use crate::level::Level;
use nu_ansi_term::{Color, Style};

/// Horizontal padding applied on each side of a label.
const LABEL_PADDING: usize = 1;

/// Parse a color identifier: `#rrggbb`, `#rgb`, or an ANSI-256 index.
///
/// Returns `None` for anything else; such labels render without a foreground.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        return match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color::Rgb(r, g, b))
            }
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Color::Rgb(r * 17, g * 17, b * 17))
            }
            _ => None,
        };
    }

    value.parse::<u8>().ok().map(Color::Fixed)
}

/// A fixed label plus the style it is painted with.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelStyle {
    label: &'static str,
    color: Option<Color>,
}

impl LevelStyle {
    pub fn new(label: &'static str, color: &str) -> Self {
        Self {
            label,
            color: parse_color(color),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn style(&self) -> Style {
        let style = Style::new().bold();
        match self.color {
            Some(color) => style.fg(color),
            None => style,
        }
    }

    /// Padded label, painted bold in the configured color.
    pub fn render(&self) -> String {
        let pad = " ".repeat(LABEL_PADDING);
        let padded = format!("{pad}{}{pad}", self.label);
        self.style().paint(padded).to_string()
    }
}

/// Label styles for every level, built from merged options.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelStyles {
    debug: LevelStyle,
    info: LevelStyle,
    warn: LevelStyle,
    error: LevelStyle,
    fatal: LevelStyle,
}

impl LevelStyles {
    pub fn from_options(options: &EffectiveOptions) -> Self {
        Self {
            debug: LevelStyle::new("DEBUG ", options.debug_hex()),
            info: LevelStyle::new(" INFO ", options.info_hex()),
            warn: LevelStyle::new(" WARN ", options.warn_hex()),
            error: LevelStyle::new("ERROR ", options.error_hex()),
            fatal: LevelStyle::new("FATAL ", options.error_hex()),
        }
    }

    pub fn get(&self, level: Level) -> &LevelStyle {
        match level {
            Level::Debug => &self.debug,
            Level::Info => &self.info,
            Level::Warn => &self.warn,
            Level::Error => &self.error,
            Level::Fatal => &self.fatal,
        }
    }
}

/// Join the parts of one output line: `<timestamp> <label> <message>`.
pub(crate) fn compose_line(timestamp: &str, label: &str, message: &str) -> String {
    if timestamp.is_empty() {
        format!("{label} {message}")
    } else {
        format!("{timestamp} {label} {message}")
    }
}
