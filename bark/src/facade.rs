//! The logging facade: a sink list plus leveled entry points that fan out to it.

use crate::config::{merge, BarkOptions, EffectiveOptions};
use crate::level::Level;
use crate::sink::StyledSink;
use crate::traits::BoxedSink;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

/// Appended to debug-and-wait messages.
pub const WAIT_SUFFIX: &str = " (󰌑)";

/// Exit status used when a fatal message was delivered.
pub const FATAL_EXIT_CODE: i32 = 1;

static GLOBAL: Bark = Bark::new();

/// Outcome of a fatal log call.
///
/// Holds how many sinks received the message. [`Fatal::exit`] ends the
/// process when that count is non-zero.
#[must_use = "a fatal outcome should be acted on, usually with `.exit()`"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fatal {
    delivered: usize,
}

impl Fatal {
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Terminate with [`FATAL_EXIT_CODE`]. Returns without exiting when no sink
    /// was initialized, so fatal calls before `init` stay no-ops.
    pub fn exit(self) {
        if self.delivered > 0 {
            std::process::exit(FATAL_EXIT_CODE);
        }
    }
}

/// Owns the sink list. Use [`Bark::global`] for the process-wide instance or
/// create independent instances with [`Bark::new`].
pub struct Bark {
    sinks: RwLock<Vec<BoxedSink>>,
}

impl Default for Bark {
    fn default() -> Self {
        Self::new()
    }
}

impl Bark {
    /// An uninitialized facade; every leveled call is a no-op until `init`.
    pub const fn new() -> Self {
        Self {
            sinks: RwLock::new(Vec::new()),
        }
    }

    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Replace the sink list with a single styled sink on standard error.
    pub fn init(&self, options: BarkOptions) {
        let effective = merge(&options);
        self.install(StyledSink::stderr(&effective), &effective);
    }

    /// Like [`Bark::init`], writing to `writer` instead of standard error.
    pub fn init_with_writer<W>(&self, options: BarkOptions, writer: W)
    where
        W: Write + Send + 'static,
    {
        let effective = merge(&options);
        self.install(StyledSink::new(writer, &effective), &effective);
    }

    fn install(&self, sink: StyledSink, effective: &EffectiveOptions) {
        let mut sinks = self.sinks.write().unwrap_or_else(PoisonError::into_inner);
        sinks.clear();
        sinks.push(Box::new(sink));
        tracing::debug!(
            time_format = effective.time_format(),
            "bark initialized with {} sink",
            sinks.len()
        );
    }

    fn sinks(&self) -> RwLockReadGuard<'_, Vec<BoxedSink>> {
        self.sinks.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn sink_count(&self) -> usize {
        self.sinks().len()
    }

    pub fn is_initialized(&self) -> bool {
        self.sink_count() > 0
    }

    /// Debug threshold when `enabled`, otherwise Info, on every held sink.
    pub fn set_debug_level(&self, enabled: bool) {
        let level = if enabled { Level::Debug } else { Level::Info };
        for sink in self.sinks().iter() {
            sink.set_level(level);
        }
        tracing::debug!(%level, "bark threshold changed");
    }

    /// Forward `message` to every sink. Returns how many sinks wrote it.
    pub fn log(&self, level: Level, message: &str) -> usize {
        self.sinks()
            .iter()
            .filter(|sink| sink.log(level, message))
            .count()
    }

    /// Formatted variant of [`Bark::log`]; skips formatting when nothing is listening.
    pub fn log_fmt(&self, level: Level, args: fmt::Arguments<'_>) -> usize {
        let sinks = self.sinks();
        if !sinks.iter().any(|sink| sink.enabled(level)) {
            return 0;
        }
        let message = args.to_string();
        sinks
            .iter()
            .filter(|sink| sink.log(level, &message))
            .count()
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(Level::Info, args);
    }

    pub fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    pub fn warn_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(Level::Warn, args);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    pub fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(Level::Error, args);
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(Level::Debug, args);
    }

    /// Write a fatal message to every sink without exiting.
    pub fn log_fatal(&self, message: &str) -> Fatal {
        Fatal {
            delivered: self.log(Level::Fatal, message),
        }
    }

    pub fn log_fatal_fmt(&self, args: fmt::Arguments<'_>) -> Fatal {
        Fatal {
            delivered: self.log_fmt(Level::Fatal, args),
        }
    }

    /// Write a fatal message to every sink, then terminate the process.
    pub fn fatal(&self, message: &str) {
        self.log_fatal(message).exit();
    }

    pub fn fatal_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fatal_fmt(args).exit();
    }

    /// Debug message with a pause marker, then block until a line arrives on stdin.
    pub fn debug_and_wait(&self, message: &str) {
        self.debug_and_wait_on(message, &mut io::stdin().lock());
    }

    pub fn debug_and_wait_fmt(&self, args: fmt::Arguments<'_>) {
        self.debug_and_wait_on(&args.to_string(), &mut io::stdin().lock());
    }

    /// Debug-and-wait against any line source. The line read is discarded.
    pub fn debug_and_wait_on<R: BufRead>(&self, message: &str, input: &mut R) {
        self.log(Level::Debug, &format!("{message}{WAIT_SUFFIX}"));

        let mut discarded = String::new();
        let _ = input.read_line(&mut discarded);
    }
}

impl fmt::Debug for Bark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bark")
            .field("sinks", &self.sink_count())
            .finish()
    }
}

// Process-wide entry points over `Bark::global()`.

/// Initialize the process-wide logger. Empty option fields use defaults.
pub fn init(options: BarkOptions) {
    Bark::global().init(options);
}

/// Show debug messages when `enabled`; otherwise only Info and above.
pub fn set_debug_level(enabled: bool) {
    Bark::global().set_debug_level(enabled);
}

pub fn info(message: &str) {
    Bark::global().info(message);
}

pub fn info_fmt(args: fmt::Arguments<'_>) {
    Bark::global().info_fmt(args);
}

pub fn warn(message: &str) {
    Bark::global().warn(message);
}

pub fn warn_fmt(args: fmt::Arguments<'_>) {
    Bark::global().warn_fmt(args);
}

pub fn error(message: &str) {
    Bark::global().error(message);
}

pub fn error_fmt(args: fmt::Arguments<'_>) {
    Bark::global().error_fmt(args);
}

pub fn debug(message: &str) {
    Bark::global().debug(message);
}

pub fn debug_fmt(args: fmt::Arguments<'_>) {
    Bark::global().debug_fmt(args);
}

/// Log at Fatal level and terminate the program.
pub fn fatal(message: &str) {
    Bark::global().fatal(message);
}

pub fn fatal_fmt(args: fmt::Arguments<'_>) {
    Bark::global().fatal_fmt(args);
}

/// Log a Debug message and wait for the user to press Enter.
pub fn debug_and_wait(message: &str) {
    Bark::global().debug_and_wait(message);
}

pub fn debug_and_wait_fmt(args: fmt::Arguments<'_>) {
    Bark::global().debug_and_wait_fmt(args);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_facade_has_no_sinks() {
        let bark = Bark::new();
        assert_eq!(bark.sink_count(), 0);
        assert!(!bark.is_initialized());
        assert_eq!(bark.log(Level::Error, "dropped"), 0);
    }

    #[test]
    fn test_fatal_outcome_before_init_is_inert() {
        let bark = Bark::new();
        let outcome = bark.log_fatal("nothing to see");
        assert_eq!(outcome.delivered(), 0);
        outcome.exit();
    }

    #[test]
    fn test_log_fmt_skips_formatting_when_disabled() {
        struct Loud;
        impl fmt::Display for Loud {
            fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                panic!("formatted a suppressed message");
            }
        }

        let bark = Bark::new();
        bark.init_with_writer(BarkOptions::default(), io::sink());
        assert_eq!(bark.log_fmt(Level::Debug, format_args!("{}", Loud)), 0);
    }
}
