//! Patient input payload
//!
//! Shared by the HTML form (urlencoded) and the JSON API. Bounds mirror the
//! form widgets; there is no cross-field validation.

use heart_core::FeatureRecord;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct PatientInput {
    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: u16,

    #[validate(range(max = 1, message = "Sex must be 0 (Female) or 1 (Male)"))]
    pub sex: u8,

    #[validate(range(max = 3, message = "Chest pain type must be between 0 and 3"))]
    pub cp: u8,

    #[validate(range(min = 80, max = 220, message = "Resting blood pressure must be between 80 and 220"))]
    pub trestbps: u16,

    #[validate(range(min = 100, max = 600, message = "Serum cholesterol must be between 100 and 600"))]
    pub chol: u16,

    #[validate(range(max = 1, message = "Fasting blood sugar must be 0 or 1"))]
    pub fbs: u8,

    #[validate(range(max = 2, message = "Resting ECG result must be between 0 and 2"))]
    pub restecg: u8,

    #[validate(range(min = 60, max = 220, message = "Maximum heart rate must be between 60 and 220"))]
    pub thalach: u16,

    #[validate(range(max = 1, message = "Exercise induced angina must be 0 or 1"))]
    pub exang: u8,

    #[validate(
        range(min = 0.0, max = 7.0, message = "ST depression must be between 0.0 and 7.0"),
        custom(function = "finite", message = "ST depression must be a number")
    )]
    pub oldpeak: f64,

    #[validate(range(max = 2, message = "ST slope must be between 0 and 2"))]
    pub slope: u8,

    #[validate(range(max = 4, message = "Major vessel count must be between 0 and 4"))]
    pub ca: u8,

    #[validate(range(max = 3, message = "Thalassemia category must be between 0 and 3"))]
    pub thal: u8,
}

/// Range checks pass NaN through, so it is rejected here
fn finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}

impl From<PatientInput> for FeatureRecord {
    fn from(input: PatientInput) -> Self {
        FeatureRecord {
            age: input.age,
            sex: input.sex,
            cp: input.cp,
            trestbps: input.trestbps,
            chol: input.chol,
            fbs: input.fbs,
            restecg: input.restecg,
            thalach: input.thalach,
            exang: input.exang,
            oldpeak: input.oldpeak,
            slope: input.slope,
            ca: input.ca,
            thal: input.thal,
        }
    }
}

impl From<FeatureRecord> for PatientInput {
    fn from(record: FeatureRecord) -> Self {
        PatientInput {
            age: record.age,
            sex: record.sex,
            cp: record.cp,
            trestbps: record.trestbps,
            chol: record.chol,
            fbs: record.fbs,
            restecg: record.restecg,
            thalach: record.thalach,
            exang: record.exang,
            oldpeak: record.oldpeak,
            slope: record.slope,
            ca: record.ca,
            thal: record.thal,
        }
    }
}

impl Default for PatientInput {
    fn default() -> Self {
        FeatureRecord::default().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heart_core::logic::features::options::{self, FieldSpec};
    use crate::error::validation_messages;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PatientInput::default().validate().is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let low = PatientInput {
            age: 1,
            trestbps: 80,
            chol: 100,
            thalach: 60,
            oldpeak: 0.0,
            ..PatientInput::default()
        };
        let high = PatientInput {
            age: 120,
            trestbps: 220,
            chol: 600,
            thalach: 220,
            oldpeak: 7.0,
            ca: 4,
            thal: 3,
            ..PatientInput::default()
        };
        assert!(low.validate().is_ok());
        assert!(high.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_fields_reported_in_feature_order() {
        let input = PatientInput {
            thal: 4,
            age: 0,
            oldpeak: 7.1,
            ..PatientInput::default()
        };
        let errors = input.validate().unwrap_err();
        let messages = validation_messages(&errors);

        assert_eq!(messages.len(), 3);
        assert!(messages[0].starts_with("Age"));
        assert!(messages[1].starts_with("ST depression"));
        assert!(messages[2].starts_with("Thalassemia"));
    }

    #[test]
    fn test_nan_oldpeak_is_rejected() {
        let input = PatientInput {
            oldpeak: f64::NAN,
            ..PatientInput::default()
        };
        let messages = validation_messages(&input.validate().unwrap_err());
        assert_eq!(messages, vec!["ST depression must be a number".to_string()]);
    }

    #[test]
    fn test_bounds_match_form_options() {
        for section in options::FORM_SECTIONS {
            for field in section.fields {
                let mut input = PatientInput::default();
                match field {
                    FieldSpec::Numeric(f) => {
                        set(&mut input, f.name, f.max);
                        assert!(input.validate().is_ok(), "{} max", f.name);
                        set(&mut input, f.name, f.max + 1.0);
                        assert!(input.validate().is_err(), "{} above max", f.name);
                    }
                    FieldSpec::Choice(f) => {
                        let top = f.options.iter().map(|(c, _)| *c).max().unwrap();
                        set(&mut input, f.name, f64::from(top));
                        assert!(input.validate().is_ok(), "{} top code", f.name);
                        set(&mut input, f.name, f64::from(top) + 1.0);
                        assert!(input.validate().is_err(), "{} unknown code", f.name);
                    }
                }
            }
        }
    }

    fn set(input: &mut PatientInput, name: &str, value: f64) {
        let mut values = FeatureRecord::from(*input).to_vector();
        let idx = heart_core::logic::features::layout::feature_index(name).unwrap();
        values[idx] = value;
        *input = FeatureRecord::from_vector(&values).into();
    }
}
