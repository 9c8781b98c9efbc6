//! Reference-time layouts (`01/02 03:04:05PM`, `15:04`, ...) rendered through chrono.

use chrono::{DateTime, Offset, TimeZone};
use std::fmt;

/// Layout tokens and their strftime equivalents, longest match first.
const LAYOUT_TOKENS: &[(&str, &str)] = &[
    ("January", "%B"),
    ("Monday", "%A"),
    (".000000000", "%.9f"),
    (".000000", "%.6f"),
    (".000", "%.3f"),
    ("-07:00", "%:z"),
    ("-0700", "%z"),
    ("2006", "%Y"),
    ("Jan", "%b"),
    ("Mon", "%a"),
    ("MST", "%Z"),
    ("002", "%j"),
    ("_2", "%e"),
    ("01", "%m"),
    ("02", "%d"),
    ("03", "%I"),
    ("04", "%M"),
    ("05", "%S"),
    ("06", "%y"),
    ("15", "%H"),
    ("PM", "%p"),
    ("pm", "%P"),
    ("1", "%-m"),
    ("2", "%-d"),
    ("3", "%-I"),
    ("4", "%-M"),
    ("5", "%-S"),
];

/// Offset token printed as `Z` for UTC and `+hh:mm` otherwise.
const ISO_ZONE_TOKEN: &str = "Z07:00";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Strftime(String),
    IsoZone,
}

/// A timestamp layout, translated once into strftime segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLayout {
    segments: Vec<Segment>,
}

impl TimeLayout {
    pub fn new(layout: &str) -> Self {
        Self {
            segments: translate(layout),
        }
    }

    pub fn format<Tz>(&self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Strftime(spec) => out.push_str(&at.format(spec).to_string()),
                Segment::IsoZone if at.offset().fix().local_minus_utc() == 0 => out.push('Z'),
                Segment::IsoZone => out.push_str(&at.format("%:z").to_string()),
            }
        }
        out
    }
}

fn translate(layout: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = String::with_capacity(layout.len() * 2);
    let mut rest = layout;

    'scan: while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix(ISO_ZONE_TOKEN) {
            if !current.is_empty() {
                segments.push(Segment::Strftime(std::mem::take(&mut current)));
            }
            segments.push(Segment::IsoZone);
            rest = tail;
            continue;
        }

        for (token, spec) in LAYOUT_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                current.push_str(spec);
                rest = tail;
                continue 'scan;
            }
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            if c == '%' {
                current.push_str("%%");
            } else {
                current.push(c);
            }
        }
        rest = chars.as_str();
    }

    if !current.is_empty() {
        segments.push(Segment::Strftime(current));
    }
    segments
}

/// Translate a reference-time layout into strftime syntax.
///
/// Unknown characters are copied literally; `%` is escaped so the result is
/// always a valid chrono format string. `Z07:00` becomes `%:z` here; only
/// [`TimeLayout::format`] prints `Z` for a zero offset.
pub fn to_strftime(layout: &str) -> String {
    translate(layout)
        .into_iter()
        .map(|segment| match segment {
            Segment::Strftime(spec) => spec,
            Segment::IsoZone => "%:z".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 14, 5, 9).unwrap()
    }

    #[test]
    fn test_default_layout_translation() {
        assert_eq!(to_strftime("01/02 03:04:05PM"), "%m/%d %I:%M:%S%p");
    }

    #[test]
    fn test_default_layout_renders() {
        let layout = TimeLayout::new("01/02 03:04:05PM");
        assert_eq!(layout.format(&sample()), "03/07 02:05:09PM");
    }

    #[test]
    fn test_twenty_four_hour_clock() {
        let layout = TimeLayout::new("15:04");
        assert_eq!(layout.format(&sample()), "14:05");
    }

    #[test]
    fn test_long_names_win_over_short() {
        assert_eq!(to_strftime("Monday, January 2 2006"), "%A, %B %-d %Y");
        assert_eq!(to_strftime("Mon Jan _2"), "%a %b %e");
    }

    #[test]
    fn test_iso_like_layout() {
        let layout = TimeLayout::new("2006-01-02T15:04:05.000");
        assert_eq!(layout.format(&sample()), "2024-03-07T14:05:09.000");
    }

    #[test]
    fn test_literals_and_percent_are_kept() {
        assert_eq!(to_strftime("at 15h 100%"), "at %Hh %-m00%%");
        let layout = TimeLayout::new("[15:04] %");
        assert_eq!(layout.format(&sample()), "[14:05] %");
    }

    #[test]
    fn test_iso_zone_is_z_for_utc() {
        let layout = TimeLayout::new("15:04Z07:00");
        assert_eq!(layout.format(&sample()), "14:05Z");
        assert_eq!(to_strftime("15:04Z07:00"), "%H:%M%:z");
    }

    #[test]
    fn test_iso_zone_prints_offset_otherwise() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = sample().with_timezone(&tz);
        let layout = TimeLayout::new("2006-01-02T15:04:05Z07:00");
        assert_eq!(layout.format(&at), "2024-03-07T16:05:09+02:00");
    }

    #[test]
    fn test_numeric_offset_layouts() {
        let tz = FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap();
        let at = sample().with_timezone(&tz);
        assert_eq!(TimeLayout::new("-0700").format(&at), "-0530");
        assert_eq!(TimeLayout::new("-07:00").format(&at), "-05:30");
    }

    #[test]
    fn test_multibyte_literals() {
        let layout = TimeLayout::new("15時04分");
        assert_eq!(layout.format(&sample()), "14時05分");
    }
}
