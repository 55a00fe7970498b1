pub mod distance;
pub mod normalize;
pub mod options;
pub mod engine;
pub mod grouping;
pub mod report;

pub use engine::{cluster, Clusterer, Group};
pub use grouping::{group, group_by, try_group_by};
pub use options::{Options, OptionsError, Tolerance, Unit};
