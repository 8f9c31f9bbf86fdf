//! Prompt construction for the interpretation call. Pure string building,
//! kept separate from the network code so it can be tested directly.

/// The scored-result fields embedded in the interpretation prompt.
#[derive(Debug, Clone, Copy)]
pub struct ResultSummary<'a> {
    pub test_name: &'a str,
    pub client_name: &'a str,
    pub total: u32,
    /// The deterministic ladder classification for this total.
    pub scale_summary: &'a str,
}

pub const SYSTEM_PROMPT: &str = "\
You are a clinical psychologist's assistant. Analyze the result of a \
psychological test and give a brief, structured summary for the \
practitioner's records. Provide a professional interpretation of the \
result; do not address the client directly.";

/// Build the user prompt for one scored result.
pub fn build_prompt(summary: &ResultSummary<'_>) -> String {
    format!(
        "Test: {}\nClient: {}\nTotal score: {}\nScale conclusion: {}",
        summary.test_name, summary.client_name, summary.total, summary.scale_summary,
    )
}
