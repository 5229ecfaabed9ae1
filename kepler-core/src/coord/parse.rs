//! Coordinate parsing from catalog text.
//!
//! The Kepler target catalog writes both coordinate axes as three
//! numeric groups — whole hours or degrees, minutes, seconds:
//!
//! ```text
//! Whitespace-delimited:  19 47 12.34
//! Signed declination:    +46 24 24.0
//! Colon-delimited:       19:47:12.34
//! ```
//!
//! The leading component is variable width (`"5 20 10.1"` and
//! `"19 47 12.34"` both parse) and groups may be separated by runs of
//! spaces, as in fixed-width catalog dumps.
//!
//! Only a leading `+` sign is accepted, and it is stripped: the source
//! catalog's declinations are all non-negative, and components are
//! defined as magnitudes. A leading `-` is rejected rather than
//! silently dropped.
//!
//! # Failure Is an Error
//!
//! Unparseable text returns [`SurveyError::CoordinateParse`]; there is
//! no zero-valued fallback triple. A zero sentinel would be
//! indistinguishable from a genuine position at the origin, and any two
//! failed rows would count each other as sky-neighbors there. Callers
//! model an unknown position by leaving it out, which keeps failed rows
//! away from every proximity comparison.
//!
//! ```
//! use kepler_core::parse_coordinate;
//!
//! let ra = parse_coordinate("19 47 12.34").unwrap();
//! assert_eq!((ra.whole, ra.minutes), (19, 47));
//! assert!((ra.seconds - 12.34).abs() < 1e-12);
//!
//! assert!(parse_coordinate("").is_err());
//! assert!(parse_coordinate("not a coordinate").is_err());
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Sexagesimal, SkyPosition};
use crate::errors::{SurveyError, SurveyResult};

static SPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        ^\s*
        \+?                              # catalog declinations carry a leading plus
        \s*
        (\d{1,3})                        # whole hours or degrees (variable width)
        \s+
        (\d{1,2})                        # minutes
        \s+
        (\d{1,2}(?:\.\d+)?)              # seconds with optional fraction
        \s*$
        "#,
    )
    .unwrap()
});

static COLON_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*\+?\s*(\d{1,3}):(\d{1,2}):(\d{1,2}(?:\.\d+)?)\s*$"#).unwrap()
});

/// Parse one coordinate axis from catalog text.
///
/// Accepts whitespace-delimited (`"19 47 12.34"`, `"+46 24 24.0"`) and
/// colon-delimited (`"19:47:12.34"`) forms. Returns the component
/// triple; the caller decides whether it is hours (right ascension) or
/// degrees (declination) — the parser treats both axes identically.
///
/// # Errors
/// Returns [`SurveyError::CoordinateParse`] for empty input, negative
/// values, non-numeric content, missing groups, or trailing garbage.
pub fn parse_coordinate(text: &str) -> SurveyResult<Sexagesimal> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(SurveyError::coordinate_parse(text, "empty input"));
    }

    if trimmed.starts_with('-') {
        return Err(SurveyError::coordinate_parse(
            text,
            "negative coordinates are not part of the catalog convention",
        ));
    }

    let caps = SPACE_REGEX
        .captures(trimmed)
        .or_else(|| COLON_REGEX.captures(trimmed))
        .ok_or_else(|| {
            SurveyError::coordinate_parse(text, "expected three numeric groups 'W MM SS.ss'")
        })?;

    // The regexes only admit digit runs, so these conversions cannot fail.
    let whole: u32 = caps[1].parse().unwrap();
    let minutes: u32 = caps[2].parse().unwrap();
    let seconds: f64 = caps[3].parse().unwrap();

    Ok(Sexagesimal::new(whole, minutes, seconds))
}

/// Parse a right ascension / declination pair into a [`SkyPosition`].
///
/// # Errors
/// Returns the failing axis's [`SurveyError::CoordinateParse`], with the
/// axis named in the message.
pub fn parse_position(ra_text: &str, dec_text: &str) -> SurveyResult<SkyPosition> {
    let ra = parse_coordinate(ra_text).map_err(|e| label_axis(e, "right ascension"))?;
    let dec = parse_coordinate(dec_text).map_err(|e| label_axis(e, "declination"))?;
    Ok(SkyPosition::new(ra, dec))
}

fn label_axis(err: SurveyError, axis: &str) -> SurveyError {
    match err {
        SurveyError::CoordinateParse { input, message } => SurveyError::CoordinateParse {
            input,
            message: format!("{axis}: {message}"),
        },
        other => other,
    }
}
