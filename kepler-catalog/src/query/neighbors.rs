//! Sky-neighbor search over a position snapshot.
//!
//! Two stars are sky-neighbors when both coordinate axes pass the
//! per-component proximity test under the same tolerance — see
//! [`SkyPosition::is_near`]. [`find_neighbors`] applies that definition
//! by exhaustive pairwise scan, which is the reference semantics.
//!
//! [`NeighborIndex`] buckets stars by their whole/minute components on
//! both axes. The proximity test requires those components to be
//! exactly equal, so every neighbor of a star shares the star's bucket
//! and a bucket-local scan yields the *same* relation as the exhaustive
//! one — it only skips comparisons that could never pass. This is the
//! catalog-side analogue of scanning only the sky pixels a query can
//! touch.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use kepler_core::SkyPosition;

use crate::catalog::KicId;

/// Tolerance used by the survey's published runs, in seconds.
pub const DEFAULT_TOLERANCE_SEC: f64 = 30.0;

/// Parameters for a neighbor search.
///
/// The tolerance applies to both axes independently: seconds of right
/// ascension and seconds of declination arc, compared component-wise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProximityParams {
    /// Maximum seconds difference on each axis, strict.
    pub tolerance_sec: f64,
}

impl Default for ProximityParams {
    fn default() -> Self {
        Self {
            tolerance_sec: DEFAULT_TOLERANCE_SEC,
        }
    }
}

/// Finds the subject's sky-neighbors by exhaustive pairwise scan.
///
/// Every other star in `positions` is tested with
/// [`SkyPosition::is_near`]; the subject itself never qualifies, even
/// if `positions` contains it. Quadratic in snapshot size, acceptable
/// at catalog scale, and the reference that [`NeighborIndex`] is held
/// to.
pub fn find_neighbors(
    subject: KicId,
    subject_position: &SkyPosition,
    positions: &BTreeMap<KicId, SkyPosition>,
    params: &ProximityParams,
) -> BTreeSet<KicId> {
    positions
        .iter()
        .filter(|&(&id, position)| {
            id != subject && subject_position.is_near(position, params.tolerance_sec)
        })
        .map(|(&id, _)| id)
        .collect()
}

/// Bucket key: whole and minute components of both axes.
type BucketKey = ((u32, u32), (u32, u32));

fn bucket_key(position: &SkyPosition) -> BucketKey {
    (
        (position.ra.whole, position.ra.minutes),
        (position.dec.whole, position.dec.minutes),
    )
}

/// Position snapshot bucketed by coordinate components.
///
/// Built once per survey run; [`neighbors_of`](Self::neighbors_of)
/// then scans a single bucket instead of the whole snapshot. The
/// neighbor relation produced is identical to [`find_neighbors`]'s.
#[derive(Debug, Clone)]
pub struct NeighborIndex {
    buckets: HashMap<BucketKey, Vec<(KicId, SkyPosition)>>,
    star_count: usize,
}

impl NeighborIndex {
    /// Buckets every position in the snapshot.
    pub fn build(positions: &BTreeMap<KicId, SkyPosition>) -> Self {
        let mut buckets: HashMap<BucketKey, Vec<(KicId, SkyPosition)>> = HashMap::new();
        for (&id, &position) in positions {
            buckets
                .entry(bucket_key(&position))
                .or_default()
                .push((id, position));
        }
        Self {
            buckets,
            star_count: positions.len(),
        }
    }

    /// Finds the subject's sky-neighbors via its bucket.
    ///
    /// Both axes must agree on whole and minute components for the
    /// proximity test to pass, so candidates outside the subject's
    /// bucket cannot be neighbors and are not inspected.
    pub fn neighbors_of(
        &self,
        subject: KicId,
        position: &SkyPosition,
        params: &ProximityParams,
    ) -> BTreeSet<KicId> {
        let Some(bucket) = self.buckets.get(&bucket_key(position)) else {
            return BTreeSet::new();
        };
        bucket
            .iter()
            .filter(|(id, candidate)| {
                *id != subject && position.is_near(candidate, params.tolerance_sec)
            })
            .map(|(id, _)| *id)
            .collect()
    }

    /// Number of indexed stars.
    pub fn len(&self) -> usize {
        self.star_count
    }

    /// Returns `true` when no star is indexed.
    pub fn is_empty(&self) -> bool {
        self.star_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kepler_core::parse_position;

    fn snapshot(stars: &[(KicId, &str, &str)]) -> BTreeMap<KicId, SkyPosition> {
        stars
            .iter()
            .map(|&(id, ra, dec)| (id, parse_position(ra, dec).unwrap()))
            .collect()
    }

    fn fixture() -> BTreeMap<KicId, SkyPosition> {
        snapshot(&[
            (1, "19 47 12.0", "+46 24 24.0"),
            (2, "19 47 17.0", "+46 24 29.0"), // 5 s from star 1 on both axes
            (3, "19 47 40.0", "+46 24 24.0"), // 28 s away in RA
            (4, "19 48 12.0", "+46 24 24.0"), // next RA minute
            (5, "5 20 10.0", "+40 10 10.0"),  // far away
        ])
    }

    #[test]
    fn test_find_neighbors_basic() {
        let positions = fixture();
        let params = ProximityParams { tolerance_sec: 10.0 };
        let neighbors = find_neighbors(1, &positions[&1], &positions, &params);
        assert_eq!(neighbors, BTreeSet::from([2]));
    }

    #[test]
    fn test_find_neighbors_excludes_self() {
        let positions = fixture();
        for (&id, position) in &positions {
            let neighbors =
                find_neighbors(id, position, &positions, &ProximityParams::default());
            assert!(!neighbors.contains(&id), "star {} neighbored itself", id);
        }
    }

    #[test]
    fn test_find_neighbors_monotonic_in_tolerance() {
        let positions = fixture();
        let mut previous: Option<BTreeSet<KicId>> = None;
        for tolerance_sec in [0.0, 1.0, 5.5, 10.0, 30.0, 120.0] {
            let params = ProximityParams { tolerance_sec };
            let neighbors = find_neighbors(1, &positions[&1], &positions, &params);
            if let Some(smaller) = &previous {
                assert!(
                    smaller.is_subset(&neighbors),
                    "neighbor set shrank as tolerance grew to {}",
                    tolerance_sec
                );
            }
            previous = Some(neighbors);
        }
        assert_eq!(previous.unwrap(), BTreeSet::from([2, 3]));
    }

    #[test]
    fn test_minute_boundary_never_neighbors() {
        let positions = snapshot(&[
            (1, "19 47 59.9", "+46 24 24.0"),
            (2, "19 48 0.1", "+46 24 24.0"),
        ]);
        let params = ProximityParams { tolerance_sec: 1e6 };
        assert!(find_neighbors(1, &positions[&1], &positions, &params).is_empty());
        assert!(find_neighbors(2, &positions[&2], &positions, &params).is_empty());
    }

    #[test]
    fn test_zero_tolerance_matches_nothing() {
        let positions = snapshot(&[
            (1, "19 47 12.0", "+46 24 24.0"),
            (2, "19 47 12.0", "+46 24 24.0"), // identical position
        ]);
        let params = ProximityParams { tolerance_sec: 0.0 };
        // |Δs| < 0 can never hold, even for identical positions.
        assert!(find_neighbors(1, &positions[&1], &positions, &params).is_empty());
    }

    #[test]
    fn test_index_agrees_with_exhaustive_scan() {
        let positions = fixture();
        let index = NeighborIndex::build(&positions);
        for tolerance_sec in [1.0, 10.0, 30.0, 120.0] {
            let params = ProximityParams { tolerance_sec };
            for (&id, position) in &positions {
                assert_eq!(
                    index.neighbors_of(id, position, &params),
                    find_neighbors(id, position, &positions, &params),
                    "index and scan disagree for star {} at tolerance {}",
                    id,
                    tolerance_sec
                );
            }
        }
    }

    #[test]
    fn test_index_subject_absent_from_snapshot() {
        let positions = fixture();
        let index = NeighborIndex::build(&positions);
        let probe = parse_position("19 47 20.0", "+46 24 27.0").unwrap();
        let neighbors = index.neighbors_of(999, &probe, &ProximityParams { tolerance_sec: 10.0 });
        assert_eq!(neighbors, BTreeSet::from([1, 2]));
    }

    #[test]
    fn test_index_empty_snapshot() {
        let index = NeighborIndex::build(&BTreeMap::new());
        assert!(index.is_empty());
        let probe = parse_position("19 47 12.0", "+46 24 24.0").unwrap();
        assert!(index
            .neighbors_of(1, &probe, &ProximityParams::default())
            .is_empty());
    }
}
