//! Same-type fraction scoring and the composed survey pipeline.
//!
//! For each star the survey asks: of all the stars sharing my class,
//! how many sit within my sky-neighborhood? The score is
//! `|neighbors ∩ class members| / |class members|` — the denominator is
//! the class's **total population**, not the neighbor count, so the
//! score reads "what share of my type's population lives near me".
//! Earlier revisions of the survey flip-flopped between the two
//! denominators; this implementation commits to the population one
//! everywhere.
//!
//! Absence is meaningful and three-valued situations are kept apart:
//! a star with no neighbors contributes no entry (not a zero), a star
//! with no class label contributes no entry, and a star whose class
//! has an empty membership set has an undefined score and likewise
//! contributes nothing.

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;

use crate::catalog::{Catalog, KicId};
use crate::query::neighbors::{NeighborIndex, ProximityParams};
use crate::types::{StarClass, TypeCatalog};

/// Fraction of `members` found among `neighbors`.
///
/// Returns `None` when `neighbors` is empty (the star contributes no
/// score) or `members` is empty (undefined denominator). A defined
/// result is in `[0, 1]`, and is `1.0` exactly when every member
/// appears among the neighbors.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use kepler_catalog::same_type_fraction;
///
/// let neighbors = BTreeSet::from([2, 3]);
/// let members = BTreeSet::from([1, 2, 4]);
/// assert_eq!(same_type_fraction(&neighbors, &members), Some(1.0 / 3.0));
///
/// assert_eq!(same_type_fraction(&BTreeSet::new(), &members), None);
/// assert_eq!(same_type_fraction(&neighbors, &BTreeSet::new()), None);
/// ```
pub fn same_type_fraction(
    neighbors: &BTreeSet<KicId>,
    members: &BTreeSet<KicId>,
) -> Option<f64> {
    if neighbors.is_empty() || members.is_empty() {
        return None;
    }
    let shared = neighbors.intersection(members).count();
    Some(shared as f64 / members.len() as f64)
}

/// Runs the full survey: per-star neighbor search scored against the
/// star's own class membership.
///
/// The pipeline is one pass over the catalog's position snapshot:
/// bucket the positions, find each star's neighbors, look up the
/// star's class, score. Stars with an unknown position, no neighbors,
/// no class label, or an undefined score are absent from the result.
///
/// Per-star work is independent: the snapshot and index are read-only
/// and every star writes only its own entry, so the scan fans out
/// across threads and the disjoint per-star results merge at the end.
/// The output is deterministic: same snapshot in, same map out.
pub fn proximity_survey(
    catalog: &Catalog,
    types: &TypeCatalog,
    params: &ProximityParams,
) -> BTreeMap<KicId, f64> {
    let positions = catalog.positions();
    let index = NeighborIndex::build(&positions);

    positions
        .par_iter()
        .filter_map(|(&id, position)| {
            let neighbors = index.neighbors_of(id, position, params);
            if neighbors.is_empty() {
                return None;
            }
            let class = types.class_of(id)?;
            same_type_fraction(&neighbors, types.members(class)).map(|fraction| (id, fraction))
        })
        .collect()
}

/// Reduces per-star scores to a per-class mean.
///
/// Classes with no scored star are absent. This is the survey's own
/// headline number per class; fuller descriptive statistics are the
/// reporting layer's business.
pub fn survey_by_class(
    scores: &BTreeMap<KicId, f64>,
    types: &TypeCatalog,
) -> BTreeMap<StarClass, f64> {
    let mut sums: BTreeMap<StarClass, (f64, usize)> = BTreeMap::new();
    for (&id, &score) in scores {
        if let Some(class) = types.class_of(id) {
            let entry = sums.entry(class).or_insert((0.0, 0));
            entry.0 += score;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(class, (sum, count))| (class, sum / count as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{COL_DEC, COL_KEPLER_ID, COL_RA};
    use std::collections::HashMap;

    fn position_rows(stars: &[(KicId, &str, &str)]) -> Vec<HashMap<String, String>> {
        stars
            .iter()
            .map(|&(id, ra, dec)| {
                HashMap::from([
                    (COL_KEPLER_ID.to_string(), id.to_string()),
                    (COL_RA.to_string(), ra.to_string()),
                    (COL_DEC.to_string(), dec.to_string()),
                ])
            })
            .collect()
    }

    fn labeled(
        classes: &[(StarClass, &[KicId])],
    ) -> TypeCatalog {
        let members = classes
            .iter()
            .map(|&(class, ids)| (class, ids.iter().copied().collect()))
            .collect();
        TypeCatalog::from_members(members).unwrap()
    }

    #[test]
    fn test_fraction_counts_population_not_neighbors() {
        // Two of five class members are nearby; three neighbors total.
        let neighbors = BTreeSet::from([10, 11, 12]);
        let members = BTreeSet::from([10, 11, 20, 21, 22]);
        assert_eq!(same_type_fraction(&neighbors, &members), Some(2.0 / 5.0));
    }

    #[test]
    fn test_fraction_full_population_nearby() {
        let neighbors = BTreeSet::from([1, 2, 3, 4]);
        let members = BTreeSet::from([2, 3]);
        assert_eq!(same_type_fraction(&neighbors, &members), Some(1.0));
    }

    #[test]
    fn test_fraction_no_overlap_is_zero_not_absent() {
        let neighbors = BTreeSet::from([1, 2]);
        let members = BTreeSet::from([3, 4]);
        assert_eq!(same_type_fraction(&neighbors, &members), Some(0.0));
    }

    #[test]
    fn test_fraction_empty_inputs_undefined() {
        assert_eq!(
            same_type_fraction(&BTreeSet::new(), &BTreeSet::from([1])),
            None
        );
        assert_eq!(
            same_type_fraction(&BTreeSet::from([1]), &BTreeSet::new()),
            None
        );
        assert_eq!(same_type_fraction(&BTreeSet::new(), &BTreeSet::new()), None);
    }

    #[test]
    fn test_survey_scores_against_own_class_only() {
        let catalog = Catalog::from_rows(&position_rows(&[
            (1, "19 47 12.0", "+46 24 24.0"),
            (2, "19 47 17.0", "+46 24 29.0"),
            (3, "19 47 17.0", "+46 24 29.0"),
        ]))
        .unwrap();
        // Star 3 is a neighbor of star 1 but belongs to another class,
        // so it never enters star 1's denominator or intersection.
        let types = labeled(&[
            (StarClass::MainSequence, &[1, 2]),
            (StarClass::Giant, &[3]),
        ]);

        let scores =
            proximity_survey(&catalog, &types, &ProximityParams { tolerance_sec: 10.0 });
        assert_eq!(scores[&1], 0.5); // {2} of {1, 2}
        assert_eq!(scores[&2], 0.5); // {1} of {1, 2}
        assert_eq!(scores[&3], 0.0); // neighbors {1, 2}, members {3}
    }

    #[test]
    fn test_survey_skips_unlabeled_and_isolated() {
        let catalog = Catalog::from_rows(&position_rows(&[
            (1, "19 47 12.0", "+46 24 24.0"),
            (2, "19 47 17.0", "+46 24 29.0"),
            (3, "5 20 10.0", "+40 10 10.0"), // isolated
        ]))
        .unwrap();
        let types = labeled(&[(StarClass::MainSequence, &[1, 3])]);

        let scores =
            proximity_survey(&catalog, &types, &ProximityParams { tolerance_sec: 10.0 });
        assert_eq!(scores.get(&2), None, "unlabeled star must not be scored");
        assert_eq!(scores.get(&3), None, "isolated star must not be scored");
        // Star 1's only neighbor is unlabeled star 2: zero overlap with
        // its own class {1, 3}, so a defined score of exactly 0.
        assert_eq!(scores[&1], 0.0);
    }

    #[test]
    fn test_survey_by_class_means() {
        let scores = BTreeMap::from([(1, 0.5), (2, 0.25), (3, 1.0)]);
        let types = labeled(&[
            (StarClass::MainSequence, &[1, 2]),
            (StarClass::Giant, &[3]),
            (StarClass::WhiteDwarf, &[4]), // never scored
        ]);

        let by_class = survey_by_class(&scores, &types);
        assert_eq!(by_class[&StarClass::MainSequence], 0.375);
        assert_eq!(by_class[&StarClass::Giant], 1.0);
        assert_eq!(by_class.get(&StarClass::WhiteDwarf), None);
    }
}
