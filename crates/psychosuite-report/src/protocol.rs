//! The assessment protocol: one client, any number of completed results,
//! formatted as a deterministic plain-text document.

use jiff::civil::Date;
use serde::Serialize;
use tracing::info;

use psychosuite_core::models::{Client, TestResult};
use psychosuite_instruments::{Instrument, get_instrument};

use crate::error::ReportError;
use crate::render::{format_timestamp, render_template};

const PROTOCOL_TEMPLATE: &str = "\
PSYCHOLOGICAL ASSESSMENT PROTOCOL
============================================================

Client: {{ client_name }}
Date of birth: {{ birth_date }}
Report date: {{ generated_on }}

============================================================
{% for section in sections %}
INSTRUMENT: {{ section.test_name }}
{{ section.description }}
Administered: {{ section.administered_at }}

Total score: {{ section.total }}

INTERPRETATION:
{{ section.interpretation }}

============================================================
{% endfor %}";

#[derive(Debug, Serialize)]
pub struct ProtocolContext {
    pub client_name: String,
    pub birth_date: String,
    pub generated_on: String,
    pub sections: Vec<ProtocolSection>,
}

#[derive(Debug, Serialize)]
pub struct ProtocolSection {
    pub test_name: String,
    pub description: String,
    pub administered_at: String,
    pub total: u32,
    pub interpretation: String,
}

/// Interpretation text for a result: the stored narrative when one has
/// been attached, otherwise the deterministic ladder classification, so
/// protocols are complete even while an AI narrative is still pending.
pub fn resolve_interpretation(result: &TestResult, instrument: &dyn Instrument) -> String {
    match &result.interpretation {
        Some(text) => text.clone(),
        None => instrument.ladder().interpret(result.total),
    }
}

/// Format the protocol document for `client` over `results`, in the order
/// given. `generated_on` is passed explicitly so output depends only on
/// its inputs. An empty result list produces the header block alone.
pub fn format_protocol(
    client: &Client,
    results: &[TestResult],
    generated_on: Date,
) -> Result<String, ReportError> {
    let sections = results
        .iter()
        .map(|result| {
            let instrument = get_instrument(&result.test_id)?;
            Ok(ProtocolSection {
                test_name: instrument.name().to_string(),
                description: instrument.description().to_string(),
                administered_at: format_timestamp(result.administered_at),
                total: result.total,
                interpretation: resolve_interpretation(result, instrument.as_ref()),
            })
        })
        .collect::<Result<Vec<_>, ReportError>>()?;

    let context = ProtocolContext {
        client_name: client.full_name.clone(),
        birth_date: client.birth_date.to_string(),
        generated_on: generated_on.to_string(),
        sections,
    };

    info!(client_id = %client.id, results = results.len(), "formatting protocol");
    render_template("protocol.txt", PROTOCOL_TEMPLATE, &context)
}

/// Suggested download name for a protocol generated on `date`.
pub fn protocol_filename(client: &Client, date: Date) -> String {
    format!("protocol_{}_{date}.txt", client.full_name.replace(' ', "_"))
}
