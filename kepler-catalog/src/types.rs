//! Coarse star classes and their membership sets.
//!
//! Stars are bucketed into four classes by simple magnitude/reddening
//! thresholds. The cascade and its cutoffs reproduce the survey's
//! published bucketing; the branch order matters and is part of the
//! contract (a faint, low-reddening star must fall through the
//! pre-main-sequence arm before the white-dwarf arm can see it).
//!
//! [`TypeCatalog`] holds the resulting membership sets, one set of
//! Kepler IDs per class, and is what the proximity survey scores
//! against. Membership sets are disjoint: construction assigns each
//! star exactly one class, and [`TypeCatalog::from_members`] rejects
//! external labelings that list an ID twice.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, KicId};

/// Magnitude floor of the pre-main-sequence arm.
const PMS_MAG_FLOOR: f64 = 13.0;
/// Reddening floor of the pre-main-sequence arm.
const PMS_REDDENING_FLOOR: f64 = 0.17;
/// Magnitude ceiling of the giant arm.
const GIANT_MAG_CEILING: f64 = 12.0;
/// Magnitude floor of the white-dwarf arm.
const WHITE_DWARF_MAG_FLOOR: f64 = 15.0;
/// Reddening ceiling of the white-dwarf arm.
const WHITE_DWARF_REDDENING_CEILING: f64 = 0.75;

/// Coarse classification bucket for a catalog star.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum StarClass {
    MainSequence,
    PreMainSequence,
    Giant,
    WhiteDwarf,
}

impl StarClass {
    /// All classes, in a fixed reporting order.
    pub const ALL: [StarClass; 4] = [
        StarClass::MainSequence,
        StarClass::PreMainSequence,
        StarClass::Giant,
        StarClass::WhiteDwarf,
    ];

    /// The survey's display name for the class.
    pub fn label(&self) -> &'static str {
        match self {
            StarClass::MainSequence => "Main Sequence",
            StarClass::PreMainSequence => "Pre Main Sequence",
            StarClass::Giant => "Giants",
            StarClass::WhiteDwarf => "White Dwarfs",
        }
    }
}

impl fmt::Display for StarClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Buckets one star by its magnitude and E(B-V) reddening.
///
/// The arms are tested in order; every star lands in exactly one class.
///
/// # Example
///
/// ```
/// use kepler_catalog::types::{classify, StarClass};
///
/// assert_eq!(classify(14.0, 0.30), StarClass::PreMainSequence);
/// assert_eq!(classify(10.0, 0.30), StarClass::Giant);
/// assert_eq!(classify(16.0, 0.10), StarClass::WhiteDwarf);
/// assert_eq!(classify(13.0, 0.10), StarClass::MainSequence);
/// ```
pub fn classify(magnitude: f64, reddening: f64) -> StarClass {
    if magnitude > PMS_MAG_FLOOR && reddening > PMS_REDDENING_FLOOR {
        StarClass::PreMainSequence
    } else if magnitude < GIANT_MAG_CEILING {
        StarClass::Giant
    } else if magnitude > WHITE_DWARF_MAG_FLOOR && reddening < WHITE_DWARF_REDDENING_CEILING {
        StarClass::WhiteDwarf
    } else {
        StarClass::MainSequence
    }
}

/// Class → membership set mapping for the loaded catalog.
///
/// All four classes are always present, possibly with empty sets, so
/// per-class reporting never has to special-case a missing bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCatalog {
    members: BTreeMap<StarClass, BTreeSet<KicId>>,
}

impl TypeCatalog {
    /// Classifies every catalog star that has both a magnitude and a
    /// reddening value; stars missing either contribute to no set.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut members: BTreeMap<StarClass, BTreeSet<KicId>> = StarClass::ALL
            .iter()
            .map(|&class| (class, BTreeSet::new()))
            .collect();

        for star in catalog.stars() {
            if let (Some(magnitude), Some(reddening)) = (star.magnitude, star.reddening) {
                let class = classify(magnitude, reddening);
                members.entry(class).or_default().insert(star.id);
            }
        }

        Self { members }
    }

    /// Wraps an externally produced labeling.
    ///
    /// # Errors
    /// Fails if any ID appears in more than one class's set — membership
    /// sets must be disjoint.
    pub fn from_members(members: BTreeMap<StarClass, BTreeSet<KicId>>) -> Result<Self> {
        let mut seen: BTreeSet<KicId> = BTreeSet::new();
        for (class, ids) in &members {
            for &id in ids {
                if !seen.insert(id) {
                    bail!("Kepler ID {} classified under more than one class ({})", id, class);
                }
            }
        }

        let mut full = members;
        for class in StarClass::ALL {
            full.entry(class).or_default();
        }
        Ok(Self { members: full })
    }

    /// Membership set of one class. Empty set if nothing landed there.
    pub fn members(&self, class: StarClass) -> &BTreeSet<KicId> {
        static EMPTY: BTreeSet<KicId> = BTreeSet::new();
        self.members.get(&class).unwrap_or(&EMPTY)
    }

    /// The class a star was bucketed under, if any.
    pub fn class_of(&self, id: KicId) -> Option<StarClass> {
        self.members
            .iter()
            .find(|(_, ids)| ids.contains(&id))
            .map(|(&class, _)| class)
    }

    /// Population of one class.
    pub fn population(&self, class: StarClass) -> usize {
        self.members(class).len()
    }

    /// Total number of classified stars.
    pub fn len(&self) -> usize {
        self.members.values().map(BTreeSet::len).sum()
    }

    /// Returns `true` when no star has been classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
