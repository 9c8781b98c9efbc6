//! Formatted logging macros over the process-wide facade.
//!
//! Each macro takes `format!` syntax and forwards to the matching `*_fmt` function.

/// Log a formatted message at Info level.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::info_fmt(::std::format_args!($($arg)*))
    };
}

/// Log a formatted message at Warn level.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::warn_fmt(::std::format_args!($($arg)*))
    };
}

/// Log a formatted message at Error level.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::error_fmt(::std::format_args!($($arg)*))
    };
}

/// Log a formatted message at Debug level.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::debug_fmt(::std::format_args!($($arg)*))
    };
}

/// Log a formatted message at Fatal level and terminate the program.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        $crate::fatal_fmt(::std::format_args!($($arg)*))
    };
}

/// Log a formatted Debug message and wait for Enter.
#[macro_export]
macro_rules! debug_and_wait {
    ($($arg:tt)*) => {
        $crate::debug_and_wait_fmt(::std::format_args!($($arg)*))
    };
}

/// Build a [`BarkError`](crate::BarkError) from `format!` arguments.
#[macro_export]
macro_rules! new_error {
    ($($arg:tt)*) => {
        $crate::new_error_fmt(::std::format_args!($($arg)*))
    };
}
