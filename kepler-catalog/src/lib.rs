//! Typed Kepler catalog records, star-class bucketing, and sky-proximity
//! queries.
//!
//! Takes the row maps produced by an external ingestion step, builds an
//! immutable typed [`Catalog`](catalog::Catalog) snapshot, buckets stars
//! into coarse classes by magnitude/reddening thresholds, and answers
//! the survey question: for each star, what share of its own class's
//! population lies among its sky-neighbors?
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | [`Star`](catalog::Star) records, [`Catalog`](catalog::Catalog) snapshot, column extraction, [`build_positions`](catalog::build_positions) |
//! | [`types`] | [`StarClass`](types::StarClass), threshold classifier, [`TypeCatalog`](types::TypeCatalog) membership sets |
//! | [`query`] | Neighbor search (exhaustive and bucket-indexed), same-type fraction survey |
//!
//! # Quick Start
//!
//! ```
//! use std::collections::HashMap;
//! use kepler_catalog::catalog::{Catalog, COL_DEC, COL_KEPLER_ID, COL_KEP_MAG, COL_RA, COL_REDDENING};
//! use kepler_catalog::query::{proximity_survey, ProximityParams};
//! use kepler_catalog::types::TypeCatalog;
//!
//! let row = |id: &str, ra: &str, dec: &str| -> HashMap<String, String> {
//!     HashMap::from([
//!         (COL_KEPLER_ID.to_string(), id.to_string()),
//!         (COL_RA.to_string(), ra.to_string()),
//!         (COL_DEC.to_string(), dec.to_string()),
//!         (COL_KEP_MAG.to_string(), "13.5".to_string()),
//!         (COL_REDDENING.to_string(), "0.05".to_string()),
//!     ])
//! };
//!
//! let rows = vec![
//!     row("1001", "19 47 12.0", "+46 24 24.0"),
//!     row("1002", "19 47 17.0", "+46 24 29.0"),
//! ];
//!
//! let catalog = Catalog::from_rows(&rows).unwrap();
//! let types = TypeCatalog::from_catalog(&catalog);
//! let scores = proximity_survey(&catalog, &types, &ProximityParams { tolerance_sec: 10.0 });
//!
//! // Each star's only neighbor is the other one, and both are main
//! // sequence, so each sees half of its class's population nearby.
//! assert_eq!(scores[&1001], 0.5);
//! assert_eq!(scores[&1002], 0.5);
//! ```
//!
//! # Pipeline
//!
//! One pass over an in-memory snapshot, no retained state between
//! stages:
//!
//! ```text
//! rows → Catalog::from_rows → positions() → NeighborIndex::build
//!      → per-star neighbors_of → same_type_fraction → score map
//! ```
//!
//! Stars drop out of the result silently rather than failing the run:
//! an unparseable coordinate leaves the position snapshot, an isolated
//! star has no neighbors, an unlabeled star has no membership set to
//! score against.

pub mod catalog;
pub mod query;
pub mod types;

pub use catalog::{build_positions, Catalog, KicId, Star};
pub use query::{
    find_neighbors, proximity_survey, same_type_fraction, survey_by_class, NeighborIndex,
    ProximityParams,
};
pub use types::{classify, StarClass, TypeCatalog};
