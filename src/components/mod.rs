//! Building blocks shared between views.

mod feature_list;
pub use feature_list::FeatureList;
