//! Coordinate formatting back into catalog notation.
//!
//! The default `Display` for [`Sexagesimal`] reproduces the catalog text
//! form (space-delimited groups with two-digit minutes and two decimal
//! places on the seconds), so a parsed coordinate round-trips through
//! [`parse_coordinate`](super::parse::parse_coordinate):
//!
//! ```
//! use kepler_core::{parse_coordinate, Sexagesimal};
//!
//! let c = Sexagesimal::new(19, 47, 12.34);
//! assert_eq!(c.to_string(), "19 47 12.34");
//! assert_eq!(parse_coordinate(&c.to_string()).unwrap(), c);
//! ```
//!
//! For human-facing output the axis-marked formatters add unit letters
//! and a configurable seconds precision:
//!
//! ```
//! use kepler_core::Sexagesimal;
//! use kepler_core::coord::format::{DmsFmt, HmsFmt};
//!
//! let ra = Sexagesimal::new(19, 47, 12.34);
//! assert_eq!(HmsFmt { frac_digits: 1 }.fmt(&ra), "19h 47m 12.3s");
//!
//! let dec = Sexagesimal::new(46, 24, 24.0);
//! assert_eq!(DmsFmt { frac_digits: 0 }.fmt(&dec), "+46d 24m 24s");
//! ```

use core::fmt;

use super::{Sexagesimal, SkyPosition};

impl fmt::Display for Sexagesimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02} {:05.2}",
            self.whole, self.minutes, self.seconds
        )
    }
}

impl fmt::Display for SkyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RA {} Dec +{}", self.ra, self.dec)
    }
}

/// Formatter for right ascension in hours-minutes-seconds notation.
///
/// `frac_digits` sets the decimal places on the seconds component. Use 0
/// for whole seconds, 2 for catalog precision.
pub struct HmsFmt {
    pub frac_digits: u8,
}

impl HmsFmt {
    /// Formats the triple as `19h 47m 12.34s`.
    pub fn fmt(&self, c: &Sexagesimal) -> String {
        format!(
            "{}h {:02}m {:.*}s",
            c.whole, c.minutes, self.frac_digits as usize, c.seconds
        )
    }
}

/// Formatter for declination in degrees-minutes-seconds notation.
///
/// The sign is always shown; catalog declinations are non-negative, so
/// it is always `+`.
pub struct DmsFmt {
    pub frac_digits: u8,
}

impl DmsFmt {
    /// Formats the triple as `+46d 24m 24.00s`.
    pub fn fmt(&self, c: &Sexagesimal) -> String {
        format!(
            "+{}d {:02}m {:.*}s",
            c.whole, c.minutes, self.frac_digits as usize, c.seconds
        )
    }
}
