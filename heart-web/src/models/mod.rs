//! Request and response payloads

pub mod assessment;
pub mod patient;

pub use assessment::*;
pub use patient::*;
