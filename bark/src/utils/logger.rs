use crate::config::{merge, BarkOptions, EffectiveOptions};
use crate::error::BarkError;
use crate::level::Level;
use crate::style::{compose_line, LevelStyles, TimeLayout};
use chrono::Local;
use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields},
    prelude::*,
    registry::LookupSpan,
    Layer,
};

/// Install a global `tracing` subscriber that prints events in bark's style on stderr.
///
/// Fails if a global subscriber is already set.
pub fn setup_tracing(options: BarkOptions, debug: bool) -> Result<(), BarkError> {
    let effective = merge(&options);
    let default_level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let console_filter = tracing_subscriber::filter::Targets::new().with_default(default_level);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .event_format(BarkFormatter::new(&effective))
        .with_filter(console_filter);

    tracing_subscriber::registry().with(console_layer).try_init()?;

    Ok(())
}

// --- Formatter ---

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push((field.name(), format!("{:?}", value)));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }
}

impl FieldVisitor {
    fn into_line(self) -> String {
        let mut line = self.message;
        for (key, value) in self.fields {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(key);
            line.push('=');
            line.push_str(&value);
        }
        line
    }
}

/// Renders `tracing` events as `<timestamp> <styled label> <message> key=value...`.
#[derive(Debug, Clone)]
pub struct BarkFormatter {
    styles: LevelStyles,
    time_layout: TimeLayout,
}

impl BarkFormatter {
    pub fn new(options: &EffectiveOptions) -> Self {
        Self {
            styles: LevelStyles::from_options(options),
            time_layout: TimeLayout::new(options.time_format()),
        }
    }
}

impl Default for BarkFormatter {
    fn default() -> Self {
        Self::new(&EffectiveOptions::default())
    }
}

impl<S, N> FormatEvent<S, N> for BarkFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let level = Level::from(event.metadata().level());
        let timestamp = self.time_layout.format(&Local::now());

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let line = compose_line(
            &timestamp,
            &self.styles.get(level).render(),
            &visitor.into_line(),
        );
        writeln!(writer, "{}", line)
    }
}
