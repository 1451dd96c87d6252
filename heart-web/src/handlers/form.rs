//! Interactive form handlers

use axum::{
    extract::{rejection::FormRejection, Form},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use heart_core::FeatureRecord;
use validator::Validate;

use crate::error::validation_messages;
use crate::middleware::model::LoadedModel;
use crate::models::PatientInput;
use crate::views::{render_page, View};

/// GET / - empty form with default values
pub async fn index() -> Html<String> {
    Html(render_page(&View::AwaitingInput, &FeatureRecord::default(), &[]))
}

/// POST /predict - run the model on the submitted form
pub async fn predict(
    LoadedModel(model): LoadedModel,
    input: Result<Form<PatientInput>, FormRejection>,
) -> Response {
    let Form(input) = match input {
        Ok(form) => form,
        Err(rejection) => {
            tracing::debug!("Rejected form: {}", rejection.body_text());
            let errors = vec![rejection.body_text()];
            let page = render_page(&View::AwaitingInput, &FeatureRecord::default(), &errors);
            return (StatusCode::BAD_REQUEST, Html(page)).into_response();
        }
    };

    let record = FeatureRecord::from(input);

    if let Err(e) = input.validate() {
        let errors = validation_messages(&e);
        tracing::debug!("Invalid form input: {}", errors.join("; "));
        let page = render_page(&View::AwaitingInput, &record, &errors);
        return (StatusCode::BAD_REQUEST, Html(page)).into_response();
    }

    let assessment = heart_core::assess(&model, &record);
    tracing::debug!("Form prediction served");

    Html(render_page(&View::ResultDisplayed(assessment), &record, &[])).into_response()
}
