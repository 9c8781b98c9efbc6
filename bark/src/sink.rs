//! Styled sink writing one line per accepted call.

use crate::config::EffectiveOptions;
use crate::level::Level;
use crate::style::{compose_line, LevelStyles, TimeLayout};
use crate::traits::Sink;
use chrono::Local;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, PoisonError};

/// Threshold a fresh sink starts with.
pub const DEFAULT_LEVEL: Level = Level::Info;

pub struct StyledSink {
    writer: Mutex<Box<dyn Write + Send>>,
    styles: LevelStyles,
    time_layout: TimeLayout,
    report_timestamp: bool,
    threshold: AtomicU8,
}

impl StyledSink {
    /// Sink on standard error, styled from `options`.
    pub fn stderr(options: &EffectiveOptions) -> Self {
        Self::new(io::stderr(), options)
    }

    pub fn new<W>(writer: W, options: &EffectiveOptions) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            writer: Mutex::new(Box::new(writer)),
            styles: LevelStyles::from_options(options),
            time_layout: TimeLayout::new(options.time_format()),
            report_timestamp: true,
            threshold: AtomicU8::new(DEFAULT_LEVEL.as_u8()),
        }
    }

    pub fn with_report_timestamp(mut self, report: bool) -> Self {
        self.report_timestamp = report;
        self
    }

    /// Render the full line for `level`, without the trailing newline.
    pub fn render(&self, level: Level, message: &str) -> String {
        let timestamp = if self.report_timestamp {
            self.time_layout.format(&Local::now())
        } else {
            String::new()
        };
        compose_line(&timestamp, &self.styles.get(level).render(), message)
    }
}

impl Sink for StyledSink {
    fn log(&self, level: Level, message: &str) -> bool {
        if !self.enabled(level) {
            return false;
        }

        let line = self.render(level, message);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        // Write failures are dropped; logging never fails the caller.
        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();
        true
    }

    fn set_level(&self, level: Level) {
        self.threshold.store(level.as_u8(), Ordering::SeqCst);
    }

    fn level(&self) -> Level {
        Level::from_u8(self.threshold.load(Ordering::SeqCst))
    }
}

impl fmt::Debug for StyledSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyledSink")
            .field("styles", &self.styles)
            .field("time_layout", &self.time_layout)
            .field("report_timestamp", &self.report_timestamp)
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}
