//! Query interface for the proximity survey.
//!
//! Two submodules cover the query surface:
//!
//! - [`neighbors`] — sky-neighbor search: the exhaustive pairwise scan
//!   and the component-bucket [`NeighborIndex`] that reproduces it
//!   exactly
//! - [`survey`] — same-type fraction scoring and the composed per-star
//!   survey pipeline

pub mod neighbors;
pub mod survey;

pub use neighbors::{find_neighbors, NeighborIndex, ProximityParams, DEFAULT_TOLERANCE_SEC};
pub use survey::{proximity_survey, same_type_fraction, survey_by_class};
