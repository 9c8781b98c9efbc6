use crate::level::Level;

/// A destination for formatted log lines with its own severity threshold.
pub trait Sink: Send + Sync {
    /// Write `message` at `level` if the level passes the threshold.
    /// Returns whether the line was written.
    fn log(&self, level: Level, message: &str) -> bool;

    /// Set the minimum level this sink accepts.
    fn set_level(&self, level: Level);

    /// Current minimum level.
    fn level(&self) -> Level;

    fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }
}

/// Boxed sink as held by the facade.
pub type BoxedSink = Box<dyn Sink>;
