//! Page rendering

use std::fmt::Write;
use std::path::Path;

use heart_core::logic::features::options::{ChoiceField, FieldSpec, NumericField, FORM_SECTIONS};
use heart_core::FeatureRecord;

use super::View;

const STYLE: &str = r#"
<style>
    body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; color: #262730; }
    hr { border: none; border-top: 1px solid #e6e6e6; margin: 1.5rem 0; }
    .columns { display: flex; gap: 2rem; }
    .column { flex: 1; }
    label { display: block; font-weight: 600; margin-top: 1rem; }
    input, select { width: 100%; padding: 6px; margin-top: 4px; box-sizing: border-box; }
    .caption { color: #808495; font-size: 0.85rem; margin: 2px 0 0; }
    button { background-color: #28a745; color: white; font-size: 18px; padding: 10px 24px; border-radius: 8px; border: none; width: 100%; cursor: pointer; }
    button:hover { background-color: #218838; color: white; }
    .progress { background: #f0f2f6; border-radius: 6px; height: 10px; overflow: hidden; }
    .progress > div { background: #ff4b4b; height: 100%; }
    .metric-label { color: #808495; font-size: 0.9rem; margin-top: 1rem; }
    .metric-value { font-size: 2.2rem; }
    .banner { padding: 1rem; border-radius: 6px; margin-top: 1rem; }
    .banner.success { background: #dff5e3; color: #1a6b2c; }
    .banner.info { background: #e1effe; color: #1c4e8a; }
    .banner.warning { background: #fff6d6; color: #8a6d0b; }
    .banner.error { background: #fde2e2; color: #9b1c1c; }
    .errors { background: #fde2e2; color: #9b1c1c; padding: 0.5rem 1rem; border-radius: 6px; }
</style>
"#;

/// Escape text for HTML element and attribute content
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Heart Disease Prediction</title>\n{STYLE}</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

fn header(out: &mut String) {
    out.push_str("<h1>❤️ Heart Disease Risk Predictor</h1>\n");
    out.push_str(
        "<p>This app predicts the risk of a patient having heart disease based on their medical data. \
         Please enter the patient's details below.</p>\n<hr>\n",
    );
}

/// The main page: form with `record` values, plus the result when present
pub fn render_page(view: &View, record: &FeatureRecord, errors: &[String]) -> String {
    let mut body = String::new();
    header(&mut body);

    if !errors.is_empty() {
        body.push_str("<div class=\"errors\"><ul>\n");
        for e in errors {
            let _ = writeln!(body, "<li>{}</li>", escape(e));
        }
        body.push_str("</ul></div>\n");
    }

    render_form(&mut body, record);

    if let View::ResultDisplayed(assessment) = view {
        let band = assessment.band;
        body.push_str("<hr>\n<section id=\"result\">\n<h2>Prediction Result</h2>\n");
        let _ = writeln!(
            body,
            "<div class=\"progress\" role=\"progressbar\" aria-valuenow=\"{p}\" aria-valuemin=\"0\" aria-valuemax=\"100\"><div style=\"width: {p}%\"></div></div>",
            p = assessment.progress
        );
        let _ = writeln!(
            body,
            "<div class=\"metric-label\">Chance of Having Heart Disease</div>\n<div class=\"metric-value\">{}</div>",
            assessment.formatted_percentage()
        );
        let _ = writeln!(
            body,
            "<div class=\"banner {}\" data-band=\"{}\">{}</div>",
            band.tone().as_str(),
            band.label(),
            escape(band.message())
        );
        body.push_str("</section>\n");
    }

    document(&body)
}

fn render_form(out: &mut String, record: &FeatureRecord) {
    out.push_str("<h2>Patient's Medical Information</h2>\n");
    out.push_str("<form method=\"post\" action=\"/predict\">\n<div class=\"columns\">\n");

    for section in FORM_SECTIONS {
        let _ = writeln!(out, "<div class=\"column\">\n<h4>{}</h4>", escape(section.title));
        for field in section.fields {
            let value = record.get_by_name(field.name()).unwrap_or_default();
            match field {
                FieldSpec::Numeric(f) => numeric_input(out, f, value),
                FieldSpec::Choice(f) => choice_input(out, f, value),
            }
        }
        out.push_str("</div>\n");
    }

    out.push_str("</div>\n<hr>\n<button type=\"submit\">Predict Heart Disease Risk</button>\n</form>\n");
}

fn numeric_input(out: &mut String, field: &NumericField, value: f64) {
    let _ = writeln!(
        out,
        "<label for=\"{name}\">{title}</label>\n\
         <input type=\"number\" id=\"{name}\" name=\"{name}\" min=\"{min}\" max=\"{max}\" step=\"{step}\" value=\"{value}\" required>\n\
         <p class=\"caption\">{caption}</p>",
        name = field.name,
        title = escape(field.title),
        min = field.min,
        max = field.max,
        step = field.step,
        value = value,
        caption = escape(field.caption),
    );
}

fn choice_input(out: &mut String, field: &ChoiceField, value: f64) {
    let _ = writeln!(
        out,
        "<label for=\"{name}\">{title}</label>\n<select id=\"{name}\" name=\"{name}\">",
        name = field.name,
        title = escape(field.title),
    );
    for (code, label) in field.options {
        let selected = if f64::from(*code) == value { " selected" } else { "" };
        let _ = writeln!(out, "<option value=\"{}\"{}>{}</option>", code, selected, escape(label));
    }
    let _ = writeln!(out, "</select>\n<p class=\"caption\">{}</p>", escape(field.caption));
}

/// Blocking page shown when no model artifact is available
pub fn render_model_missing(path: &Path) -> String {
    let mut body = String::new();
    body.push_str("<h1>❤️ Heart Disease Risk Predictor</h1>\n");
    let _ = writeln!(
        body,
        "<div class=\"banner error\" id=\"model-missing\">Model file not found. \
         Please run heart-train to train and save the model.<br><small>Expected at: {}</small></div>",
        escape(&path.display().to_string())
    );
    document(&body)
}
