//! Typed catalog records built from ingestion rows.
//!
//! The ingestion step (external to this crate) yields one map per
//! catalog row, column name → raw string value. [`Catalog::from_rows`]
//! turns those into typed [`Star`] records keyed by Kepler ID and keeps
//! them as an immutable snapshot; every query in [`crate::query`] reads
//! from that snapshot and writes nothing back.
//!
//! Field handling follows the survey's degrade-gracefully rule:
//!
//! - an empty numeric cell is an absent value, not an error;
//! - coordinate text that fails to parse leaves the star with an
//!   unknown position (`position: None`), which keeps it out of every
//!   proximity comparison;
//! - a non-empty numeric cell with garbage content, a missing or
//!   malformed `Kepler ID`, or a duplicate ID is a structural problem
//!   in the input and fails construction.

use std::collections::{BTreeMap, HashMap};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use kepler_core::{parse_position, SkyPosition, SurveyError};

/// Kepler Input Catalog identifier.
pub type KicId = u64;

/// Column holding the Kepler Input Catalog identifier.
pub const COL_KEPLER_ID: &str = "Kepler ID";
/// Column holding right ascension text, J2000 equinox.
pub const COL_RA: &str = "RA (J2000)";
/// Column holding declination text, J2000 equinox.
pub const COL_DEC: &str = "Dec (J2000)";
/// Column holding the Kepler-band apparent magnitude.
pub const COL_KEP_MAG: &str = "KEP Mag";
/// Column holding the E(B-V) reddening, the survey's temperature proxy.
pub const COL_REDDENING: &str = "E(B-V)";
/// Column holding the stellar radius, in solar radii.
pub const COL_RADIUS: &str = "Radius";

/// One catalog target with its typed fields.
///
/// Optional fields are `None` where the source row had nothing usable:
/// an empty cell for the numeric columns, unparseable text for the
/// position. An absent position means "position unknown" — such a star
/// never appears in a position snapshot and never matches a proximity
/// test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Kepler Input Catalog identifier.
    pub id: KicId,
    /// Sky position, when both coordinate axes parsed.
    pub position: Option<SkyPosition>,
    /// Kepler-band apparent magnitude.
    pub magnitude: Option<f64>,
    /// E(B-V) reddening.
    pub reddening: Option<f64>,
    /// Stellar radius, in solar radii.
    pub radius: Option<f64>,
}

/// Immutable snapshot of the loaded catalog, keyed by Kepler ID.
///
/// Built once per run by [`Catalog::from_rows`]; the query layer only
/// ever reads it. Column accessors return fresh maps so callers can
/// hand them to the external statistics/plotting steps without touching
/// the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    stars: BTreeMap<KicId, Star>,
}

impl Catalog {
    /// Builds a catalog snapshot from ingestion rows.
    ///
    /// # Errors
    /// Fails if a row lacks the `Kepler ID` column, the ID does not
    /// parse as an integer, two rows share an ID, or a non-empty
    /// numeric cell does not parse as a number.
    pub fn from_rows(rows: &[HashMap<String, String>]) -> Result<Self> {
        let mut stars = BTreeMap::new();

        for (row_number, row) in rows.iter().enumerate() {
            let raw_id = row
                .get(COL_KEPLER_ID)
                .ok_or_else(|| SurveyError::missing_column(COL_KEPLER_ID))
                .with_context(|| format!("row {}", row_number))?;
            let id: KicId = raw_id
                .trim()
                .parse()
                .map_err(|_| SurveyError::field_parse(COL_KEPLER_ID, raw_id, "not an integer"))
                .with_context(|| format!("row {}", row_number))?;

            let position = match (row.get(COL_RA), row.get(COL_DEC)) {
                // Parse failure means "position unknown", not a bad row.
                (Some(ra), Some(dec)) => parse_position(ra, dec).ok(),
                _ => None,
            };

            let star = Star {
                id,
                position,
                magnitude: numeric_field(row, COL_KEP_MAG)
                    .with_context(|| format!("row {}", row_number))?,
                reddening: numeric_field(row, COL_REDDENING)
                    .with_context(|| format!("row {}", row_number))?,
                radius: numeric_field(row, COL_RADIUS)
                    .with_context(|| format!("row {}", row_number))?,
            };

            if stars.insert(id, star).is_some() {
                bail!("Duplicate Kepler ID {} at row {}", id, row_number);
            }
        }

        Ok(Self { stars })
    }

    /// Returns the star with the given ID, if present.
    pub fn get(&self, id: KicId) -> Option<&Star> {
        self.stars.get(&id)
    }

    /// Iterates over all stars in ID order.
    pub fn stars(&self) -> impl Iterator<Item = &Star> {
        self.stars.values()
    }

    /// Number of stars in the snapshot.
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Returns `true` when the snapshot holds no stars.
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Positions of every star whose coordinates parsed.
    pub fn positions(&self) -> BTreeMap<KicId, SkyPosition> {
        self.stars
            .values()
            .filter_map(|s| s.position.map(|p| (s.id, p)))
            .collect()
    }

    /// Kepler magnitudes of every star that has one.
    pub fn magnitudes(&self) -> BTreeMap<KicId, f64> {
        self.column(|s| s.magnitude)
    }

    /// E(B-V) reddenings of every star that has one.
    pub fn reddenings(&self) -> BTreeMap<KicId, f64> {
        self.column(|s| s.reddening)
    }

    /// Radii of every star that has one.
    pub fn radii(&self) -> BTreeMap<KicId, f64> {
        self.column(|s| s.radius)
    }

    fn column(&self, field: impl Fn(&Star) -> Option<f64>) -> BTreeMap<KicId, f64> {
        self.stars
            .values()
            .filter_map(|s| field(s).map(|v| (s.id, v)))
            .collect()
    }
}

fn numeric_field(row: &HashMap<String, String>, column: &str) -> Result<Option<f64>> {
    let Some(raw) = row.get(column) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| SurveyError::field_parse(column, raw, "not a number"))?;
    Ok(Some(value))
}

/// Pairs per-star coordinate text maps into positions.
///
/// Joins the two maps on Kepler ID; an ID present in only one map, or
/// whose text fails to parse on either axis, contributes nothing. This
/// is the entry point for callers that extracted the two coordinate
/// columns themselves rather than going through [`Catalog::from_rows`].
pub fn build_positions(
    ra_by_id: &BTreeMap<KicId, String>,
    dec_by_id: &BTreeMap<KicId, String>,
) -> BTreeMap<KicId, SkyPosition> {
    ra_by_id
        .iter()
        .filter_map(|(&id, ra_text)| {
            let dec_text = dec_by_id.get(&id)?;
            parse_position(ra_text, dec_text).ok().map(|p| (id, p))
        })
        .collect()
}
