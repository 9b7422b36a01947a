pub mod error;
pub mod invariants;
pub mod manager;
pub mod store;
pub mod subtract;
pub mod types;

pub use error::{RegionError, RegionErrorKind};
pub use invariants::{
    assert_counters_consistent, assert_hypervolume_consistent, assert_pairwise_disjoint,
};
pub use manager::PotentialRegion;
pub use store::{BoxStore, LinearScanStore};
pub use subtract::{ClassifiedBox, DimRange, classify, subtract_cones};
pub use types::{BoxId, Hyperbox, QueryRegion, Vector};
