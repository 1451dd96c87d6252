//! HTML views
//!
//! The page has two states. `AwaitingInput` shows the form only;
//! `ResultDisplayed` adds the prediction below it. Only the predict action
//! moves to `ResultDisplayed`, and a fresh page load returns to
//! `AwaitingInput`.

pub mod page;

use heart_core::RiskAssessment;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    AwaitingInput,
    ResultDisplayed(RiskAssessment),
}

pub use page::{render_model_missing, render_page};
