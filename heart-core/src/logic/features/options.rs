//! Field Options - Presentation metadata for the input form
//!
//! Static tables mapping categorical codes to display labels plus the numeric
//! bounds enforced by the input surface. None of this affects prediction.

use serde::Serialize;

/// Bounded numeric input
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NumericField {
    pub name: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Fixed choice input (code → label)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChoiceField {
    pub name: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
    pub options: &'static [(u8, &'static str)],
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldSpec {
    Numeric(NumericField),
    Choice(ChoiceField),
}

impl FieldSpec {
    pub fn name(&self) -> &'static str {
        match self {
            FieldSpec::Numeric(f) => f.name,
            FieldSpec::Choice(f) => f.name,
        }
    }
}

/// A titled group of fields (rendered as one column)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormSection {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

// ============================================================================
// NUMERIC BOUNDS
// ============================================================================

pub const AGE: NumericField = NumericField {
    name: "age",
    title: "Age",
    caption: "Patient's age in years.",
    min: 1.0,
    max: 120.0,
    step: 1.0,
};

pub const TRESTBPS: NumericField = NumericField {
    name: "trestbps",
    title: "Resting Blood Pressure (trestbps)",
    caption: "Blood pressure in mm Hg upon admission to the hospital.",
    min: 80.0,
    max: 220.0,
    step: 1.0,
};

pub const CHOL: NumericField = NumericField {
    name: "chol",
    title: "Serum Cholesterol (chol)",
    caption: "Cholesterol level in mg/dl.",
    min: 100.0,
    max: 600.0,
    step: 1.0,
};

pub const THALACH: NumericField = NumericField {
    name: "thalach",
    title: "Maximum Heart Rate Achieved (thalach)",
    caption: "The highest heart rate achieved during a stress test.",
    min: 60.0,
    max: 220.0,
    step: 1.0,
};

pub const OLDPEAK: NumericField = NumericField {
    name: "oldpeak",
    title: "ST Depression (oldpeak)",
    caption: "ST depression induced by exercise relative to rest.",
    min: 0.0,
    max: 7.0,
    step: 0.1,
};

// ============================================================================
// CATEGORICAL OPTIONS
// ============================================================================

pub const SEX: ChoiceField = ChoiceField {
    name: "sex",
    title: "Sex",
    caption: "Patient's gender (0: Female, 1: Male).",
    options: &[(0, "Female"), (1, "Male")],
};

pub const CP: ChoiceField = ChoiceField {
    name: "cp",
    title: "Chest Pain Type (cp)",
    caption: "Describes the type of chest pain experienced.",
    options: &[
        (0, "Typical Angina"),
        (1, "Atypical Angina"),
        (2, "Non-anginal Pain"),
        (3, "Asymptomatic"),
    ],
};

pub const FBS: ChoiceField = ChoiceField {
    name: "fbs",
    title: "Fasting Blood Sugar > 120 mg/dl (fbs)",
    caption: "Indicates if fasting blood sugar is higher than 120 mg/dl.",
    options: &[(0, "False"), (1, "True")],
};

pub const RESTECG: ChoiceField = ChoiceField {
    name: "restecg",
    title: "Resting ECG Results (restecg)",
    caption: "Results of the resting electrocardiogram.",
    options: &[
        (0, "Normal"),
        (1, "ST-T wave abnormality"),
        (2, "Probable or definite left ventricular hypertrophy"),
    ],
};

pub const EXANG: ChoiceField = ChoiceField {
    name: "exang",
    title: "Exercise Induced Angina (exang)",
    caption: "Whether the patient experienced angina (chest pain) during exercise.",
    options: &[(0, "No"), (1, "Yes")],
};

pub const SLOPE: ChoiceField = ChoiceField {
    name: "slope",
    title: "Slope of Peak Exercise ST Segment (slope)",
    caption: "The slope of the ST segment during peak exercise.",
    options: &[(0, "Upsloping"), (1, "Flat"), (2, "Downsloping")],
};

pub const CA: ChoiceField = ChoiceField {
    name: "ca",
    title: "Major Vessels Colored by Flourosopy (ca)",
    caption: "Number of major vessels (0-4) visualized by fluoroscopy.",
    options: &[(0, "0"), (1, "1"), (2, "2"), (3, "3"), (4, "4")],
};

pub const THAL: ChoiceField = ChoiceField {
    name: "thal",
    title: "Thalassemia (thal)",
    caption: "A blood disorder called thalassemia.",
    options: &[
        (0, "Normal"),
        (1, "Fixed Defect"),
        (2, "Reversible Defect"),
        (3, "Unknown"),
    ],
};

// ============================================================================
// FORM LAYOUT
// ============================================================================

/// Form sections in display order
pub const FORM_SECTIONS: &[FormSection] = &[
    FormSection {
        title: "Basic Information & Vitals",
        fields: &[
            FieldSpec::Numeric(AGE),
            FieldSpec::Choice(SEX),
            FieldSpec::Choice(CP),
            FieldSpec::Numeric(TRESTBPS),
            FieldSpec::Numeric(CHOL),
            FieldSpec::Choice(FBS),
        ],
    },
    FormSection {
        title: "Advanced Test Results",
        fields: &[
            FieldSpec::Choice(RESTECG),
            FieldSpec::Numeric(THALACH),
            FieldSpec::Choice(EXANG),
            FieldSpec::Numeric(OLDPEAK),
            FieldSpec::Choice(SLOPE),
            FieldSpec::Choice(CA),
            FieldSpec::Choice(THAL),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::layout::{FEATURE_COUNT, FEATURE_LAYOUT};

    #[test]
    fn test_form_covers_every_feature_once() {
        let names: Vec<&str> = FORM_SECTIONS
            .iter()
            .flat_map(|s| s.fields.iter().map(|f| f.name()))
            .collect();

        assert_eq!(names.len(), FEATURE_COUNT);
        for feature in FEATURE_LAYOUT {
            assert_eq!(names.iter().filter(|n| *n == feature).count(), 1, "{feature}");
        }
    }

    #[test]
    fn test_choice_labels() {
        assert_eq!(SEX.options[1], (1, "Male"));
        assert_eq!(CP.options[2], (2, "Non-anginal Pain"));
        assert_eq!(THAL.options[3], (3, "Unknown"));
        assert_eq!(CA.options[4], (4, "4"));
        assert_eq!(SLOPE.options.len(), 3);
    }
}
