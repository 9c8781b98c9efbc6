//! # Bark - Colorful Leveled Logging
//!
//! A small logging facade with Info, Warn, Error, Debug and Fatal levels,
//! custom label colors and reference-time timestamp layouts.
//!
//! ```no_run
//! bark::init(bark::BarkOptions::new().with_time_format("15:04:05"));
//! bark::set_debug_level(true);
//!
//! bark::info("server ready");
//! bark::warn!("{} retries left", 2);
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Options, defaults and merge
//! - [`error`] - Error type and constructors
//! - [`facade`] - The [`Bark`] sink owner and process-wide entry points
//! - [`sink`] - Styled sink writing one line per call
//! - [`style`] - Label styles, colors and timestamp layouts
//! - [`traits`] - The [`Sink`] trait

pub mod config;
pub mod error;
pub mod facade;
pub mod level;
mod macros;
pub mod sink;
pub mod style;
pub mod traits;
pub(crate) mod utils;

pub use config::{merge, BarkOptions, EffectiveOptions};
pub use error::{new_error, new_error_fmt, BarkError};
pub use facade::{
    debug, debug_and_wait, debug_and_wait_fmt, debug_fmt, error, error_fmt, fatal, fatal_fmt,
    info, info_fmt, init, set_debug_level, warn, warn_fmt, Bark, Fatal,
};
pub use level::Level;
pub use sink::StyledSink;
pub use style::{LevelStyle, LevelStyles, TimeLayout};
pub use traits::Sink;

pub use utils::{setup_tracing, BarkFormatter};
