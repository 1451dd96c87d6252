//! Logic Module - Training & prediction engines
//!
//! - `features/` - Feature schema (layout, record, form options)
//! - `dataset/` - CSV loading and train/test split
//! - `model/` - Logistic regression, artifact I/O, risk banding
//! - `trainer` - Offline training pipeline

pub mod dataset;
pub mod features;
pub mod model;
pub mod trainer;
