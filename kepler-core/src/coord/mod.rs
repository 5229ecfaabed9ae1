//! Sexagesimal coordinate types and the proximity test.
//!
//! The Kepler target catalog gives positions as sexagesimal text: right
//! ascension in hours and declination in degrees, each as three
//! components `"W MM SS.ss"`. This module keeps those components intact
//! in [`Sexagesimal`] rather than collapsing them to a single angle,
//! because the survey's proximity test compares components exactly.
//!
//! # Submodules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`parse`] | Catalog text → [`Sexagesimal`] / [`SkyPosition`] |
//! | [`format`] | Catalog-text `Display` and axis-marked formatters |
//!
//! # Proximity Test
//!
//! Two components are close when their whole and minute parts are
//! exactly equal and their seconds differ by less than the tolerance;
//! two positions are close when both axes pass independently. See
//! [`Sexagesimal::within_seconds`] for the minute-boundary limitation
//! this implies.

pub mod format;
pub mod parse;
mod serde_;

use serde::{Deserialize, Serialize};

use crate::constants::{SECONDS_PER_MINUTE, SECONDS_PER_WHOLE};

/// One sexagesimal coordinate axis: a whole/minute/second triple.
///
/// `whole` is hours for right ascension and degrees for declination; the
/// two axes are otherwise handled identically. Components are always
/// non-negative magnitudes: the catalog contains only northern targets,
/// and the parser strips the conventional leading `+` on declinations.
///
/// # Example
///
/// ```
/// use kepler_core::Sexagesimal;
///
/// let ra = Sexagesimal::new(19, 47, 12.34);
/// assert_eq!(ra.whole, 19);
/// assert!((ra.total_seconds() - 71232.34).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sexagesimal {
    /// Whole hours (right ascension) or degrees (declination).
    pub whole: u32,
    /// Whole minutes.
    pub minutes: u32,
    /// Seconds, with fraction.
    pub seconds: f64,
}

impl Sexagesimal {
    /// Creates a component triple.
    pub fn new(whole: u32, minutes: u32, seconds: f64) -> Self {
        Self {
            whole,
            minutes,
            seconds,
        }
    }

    /// Returns the triple flattened to seconds.
    ///
    /// For display and diagnostics only. The proximity test never uses
    /// this value: it compares components, not flattened offsets.
    pub fn total_seconds(&self) -> f64 {
        self.whole as f64 * SECONDS_PER_WHOLE
            + self.minutes as f64 * SECONDS_PER_MINUTE
            + self.seconds
    }

    /// Coarse proximity test for one axis.
    ///
    /// Returns `true` only if `whole` and `minutes` are exactly equal on
    /// both sides and the absolute seconds difference is strictly less
    /// than `tolerance_sec`.
    ///
    /// This is not an angular-separation test. Components straddling a
    /// minute boundary are never close no matter the tolerance:
    /// `19 47 59.9` and `19 48 00.1` differ by 0.2 s of arc but fail the
    /// minute-equality check. That coarseness is a deliberate property
    /// of the survey's neighbor definition, and it biases results for
    /// positions near a minute boundary.
    ///
    /// # Example
    ///
    /// ```
    /// use kepler_core::Sexagesimal;
    ///
    /// let a = Sexagesimal::new(19, 47, 12.0);
    /// let b = Sexagesimal::new(19, 47, 17.0);
    /// assert!(a.within_seconds(&b, 10.0));
    /// assert!(!a.within_seconds(&b, 5.0));
    ///
    /// // Minute boundary: never close, regardless of tolerance.
    /// let c = Sexagesimal::new(19, 47, 59.9);
    /// let d = Sexagesimal::new(19, 48, 0.1);
    /// assert!(!c.within_seconds(&d, 1000.0));
    /// ```
    pub fn within_seconds(&self, other: &Sexagesimal, tolerance_sec: f64) -> bool {
        if self.whole != other.whole || self.minutes != other.minutes {
            return false;
        }
        (self.seconds - other.seconds).abs() < tolerance_sec
    }
}

/// A sky position: right ascension and declination triples.
///
/// Built from catalog text by [`parse::parse_position`] or directly from
/// components. Positions are immutable snapshots; the survey never
/// mutates them after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyPosition {
    /// Right ascension, in hours/minutes/seconds.
    pub ra: Sexagesimal,
    /// Declination, in degrees/minutes/seconds.
    pub dec: Sexagesimal,
}

impl SkyPosition {
    /// Creates a position from the two axis triples.
    pub fn new(ra: Sexagesimal, dec: Sexagesimal) -> Self {
        Self { ra, dec }
    }

    /// Returns `true` when both axes pass [`Sexagesimal::within_seconds`]
    /// under the same tolerance.
    ///
    /// # Example
    ///
    /// ```
    /// use kepler_core::parse_position;
    ///
    /// let a = parse_position("19 47 12.0", "+46 24 24.0").unwrap();
    /// let b = parse_position("19 47 17.0", "+46 24 29.0").unwrap();
    /// assert!(a.is_near(&b, 10.0));
    ///
    /// // One axis out of range is enough to fail.
    /// let c = parse_position("19 47 17.0", "+46 25 24.0").unwrap();
    /// assert!(!a.is_near(&c, 10.0));
    /// ```
    pub fn is_near(&self, other: &SkyPosition, tolerance_sec: f64) -> bool {
        self.ra.within_seconds(&other.ra, tolerance_sec)
            && self.dec.within_seconds(&other.dec, tolerance_sec)
    }
}
