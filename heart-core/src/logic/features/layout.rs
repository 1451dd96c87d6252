//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the patient feature schema**
//!
//! ## Rules:
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! A model artifact records the version and layout hash it was trained
//! with. The predictor refuses artifacts whose layout differs.

use crc32fast::Hasher;

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Demographics & vitals (0-5) ===
    "age",       // 0: Age in years
    "sex",       // 1: 0 = female, 1 = male
    "cp",        // 2: Chest pain type (0-3)
    "trestbps",  // 3: Resting blood pressure (mm Hg)
    "chol",      // 4: Serum cholesterol (mg/dl)
    "fbs",       // 5: Fasting blood sugar > 120 mg/dl

    // === Test results (6-12) ===
    "restecg",   // 6: Resting ECG category (0-2)
    "thalach",   // 7: Maximum heart rate achieved
    "exang",     // 8: Exercise induced angina
    "oldpeak",   // 9: ST depression induced by exercise
    "slope",     // 10: Slope of peak exercise ST segment (0-2)
    "ca",        // 11: Major vessels colored by fluoroscopy (0-4)
    "thal",      // 12: Thalassemia category (0-3)
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 13;

/// Binary label column in the training dataset
pub const TARGET_COLUMN: &str = "target";

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 over the version and the ordered feature names
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when feature layout doesn't match expected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Feature layout mismatch: expected v{} (hash: {:08x}), got v{} (hash: {:08x})",
            self.expected_version,
            self.expected_hash,
            self.actual_version,
            self.actual_hash
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Validate that incoming data matches current layout
pub fn validate_layout(incoming_version: u8, incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash();

    if incoming_version != FEATURE_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError {
            expected_version: FEATURE_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }

    Ok(())
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

// ============================================================================
// TESTS
// ============================================================================
