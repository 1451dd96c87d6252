//! Features Module - Patient feature schema
//!
//! Layout (names, order, version), the typed record, and the presentation
//! tables used by input forms.

pub mod layout;
pub mod options;
pub mod record;

// Re-export common types
pub use layout::{
    LayoutMismatchError, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION, TARGET_COLUMN,
};
pub use record::FeatureRecord;
