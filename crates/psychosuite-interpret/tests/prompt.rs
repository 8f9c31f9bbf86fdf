use psychosuite_interpret::error::InterpretError;
use psychosuite_interpret::fold_outcome;
use psychosuite_interpret::prompt::{ResultSummary, SYSTEM_PROMPT, build_prompt};

#[test]
fn prompt_embeds_every_result_field() {
    let summary = ResultSummary {
        test_name: "HADS",
        client_name: "Alice Example",
        total: 9,
        scale_summary: "Subclinical anxiety/depression (8-10 points)",
    };

    let prompt = build_prompt(&summary);
    assert!(prompt.contains("Test: HADS"));
    assert!(prompt.contains("Client: Alice Example"));
    assert!(prompt.contains("Total score: 9"));
    assert!(prompt.contains("Scale conclusion: Subclinical anxiety/depression"));
}

#[test]
fn system_prompt_addresses_the_practitioner_not_the_client() {
    assert!(SYSTEM_PROMPT.contains("clinical psychologist's assistant"));
    assert!(SYSTEM_PROMPT.contains("do not address the client directly"));
}

#[test]
fn successful_generation_is_stored_verbatim() {
    let text = fold_outcome("my-model", Ok("A calm narrative.".to_string()));
    assert_eq!(text, "A calm narrative.");
}

#[test]
fn failed_generation_folds_into_a_visible_fallback() {
    let err = InterpretError::Invocation("model not enabled in region".to_string());
    let text = fold_outcome("my-model", Err(err));
    assert_eq!(
        text,
        "Interpretation unavailable: model invocation failed: model not enabled in region"
    );
}
