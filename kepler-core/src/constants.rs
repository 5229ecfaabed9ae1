//! Sexagesimal unit conversions.

/// Seconds per minute of arc or time.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per whole hour (right ascension) or degree (declination).
pub const SECONDS_PER_WHOLE: f64 = 3600.0;

/// Minutes per whole hour or degree.
pub const MINUTES_PER_WHOLE: f64 = 60.0;
