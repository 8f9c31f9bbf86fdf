//! Single-result detail report: header, score, interpretation, and the
//! question-by-question answer protocol.

use serde::Serialize;

use psychosuite_core::models::{Client, TestResult};
use psychosuite_instruments::get_instrument;

use crate::error::ReportError;
use crate::protocol::resolve_interpretation;
use crate::render::{format_timestamp, render_template};

const DETAIL_TEMPLATE: &str = "\
PSYCHOLOGICAL ASSESSMENT REPORT
=========================================

Client: {{ client_name }}
Instrument: {{ test_name }}
Administered: {{ administered_at }}

--- RESULTS ---
Total score: {{ total }}
Scale summary: {{ summary }}

--- INTERPRETATION ---
{{ interpretation }}

--- ITEM PROTOCOL ---
{% for item in items %}Question {{ loop.index }}: {{ item.prompt }}
Answer (score): {{ item.answer }}

{% endfor %}";

#[derive(Debug, Serialize)]
pub struct DetailContext {
    pub client_name: String,
    pub test_name: String,
    pub administered_at: String,
    pub total: u32,
    pub summary: String,
    pub interpretation: String,
    pub items: Vec<DetailItem>,
}

#[derive(Debug, Serialize)]
pub struct DetailItem {
    pub prompt: String,
    pub answer: u32,
}

/// Format the detail report for a single stored result.
pub fn format_detail(client: &Client, result: &TestResult) -> Result<String, ReportError> {
    let instrument = get_instrument(&result.test_id)?;

    let items = instrument
        .questions()
        .iter()
        .zip(&result.answers)
        .map(|(question, answer)| DetailItem {
            prompt: question.prompt.clone(),
            answer: *answer,
        })
        .collect();

    let context = DetailContext {
        client_name: client.full_name.clone(),
        test_name: instrument.name().to_string(),
        administered_at: format_timestamp(result.administered_at),
        total: result.total,
        summary: instrument.ladder().interpret(result.total),
        interpretation: resolve_interpretation(result, instrument.as_ref()),
        items,
    };

    render_template("detail.txt", DETAIL_TEMPLATE, &context)
}
