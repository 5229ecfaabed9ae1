//! Coordinate-level building blocks for Kepler survey catalogs.
//!
//! `kepler-core` provides the sexagesimal coordinate types used by the
//! survey pipeline: a component triple for one coordinate axis, a sky
//! position pairing right ascension and declination, a parser for the
//! catalog's text forms, and the coarse per-component proximity test
//! the neighbor search is built on.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`coord`] | [`Sexagesimal`] and [`SkyPosition`] types, parsing, formatting, proximity test |
//! | [`constants`] | Sexagesimal unit conversions |
//! | [`errors`] | [`SurveyError`] and [`SurveyResult`] |
//!
//! # Quick Start
//!
//! ```
//! use kepler_core::{parse_position, SkyPosition};
//!
//! // Catalog text: RA in hours, Dec in degrees, both "W MM SS.ss"
//! let a = parse_position("19 47 12.34", "+46 24 24.0").unwrap();
//! let b = parse_position("19 47 17.34", "+46 24 29.0").unwrap();
//!
//! // Both axes agree on whole and minute components and the seconds
//! // differ by 5.0, so the positions are close under a 10 s tolerance.
//! assert!(a.is_near(&b, 10.0));
//! assert!(!a.is_near(&b, 5.0));
//! ```
//!
//! # Design Notes
//!
//! - **Components, not angles**: positions keep their whole/minute/second
//!   components instead of collapsing to a single angle, because the
//!   proximity test compares components exactly. See
//!   [`Sexagesimal::within_seconds`] for the resulting minute-boundary
//!   limitation.
//!
//! - **No parse sentinel**: unparseable coordinate text is an explicit
//!   [`SurveyError`], never a zero-valued coordinate. Callers represent
//!   an unknown position by absence, which keeps failed rows out of
//!   every proximity comparison.

pub mod constants;
pub mod coord;
pub mod errors;

pub use coord::parse::{parse_coordinate, parse_position};
pub use coord::{Sexagesimal, SkyPosition};
pub use errors::{SurveyError, SurveyResult};
