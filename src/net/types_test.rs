use super::*;

fn parse(body: &str) -> VerificationResponse {
    serde_json::from_str(body).expect("response should deserialize")
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn minimal_body_deserializes_with_defaults() {
    let resp = parse("{}");
    assert!(!resp.success);
    assert!(resp.file_type.is_none());
    assert!(resp.ai_response.is_none());
}

#[test]
fn full_body_deserializes() {
    let resp = parse(
        r#"{
            "success": true,
            "file_type": "pdf",
            "page_count": 3,
            "prompt": "Reviewed the document.",
            "ai_response": {
                "document_type": "passport",
                "document_lang": "fr",
                "has_english_translation": false,
                "applicant_name": "Jane Doe",
                "document_details": {"issuing_country": "France"}
            }
        }"#,
    );

    assert!(resp.success);
    assert_eq!(resp.file_type.as_deref(), Some("pdf"));
    assert_eq!(resp.page_count, Some(3));
    let ai = resp.ai_response.expect("ai_response present");
    assert_eq!(ai.applicant_name.as_deref(), Some("Jane Doe"));
    assert_eq!(
        ai.document_details.get("issuing_country"),
        Some(&serde_json::json!("France"))
    );
}

// =============================================================
// has_usable_data
// =============================================================

#[test]
fn success_flag_alone_is_usable() {
    assert!(parse(r#"{"success": true}"#).has_usable_data());
}

#[test]
fn empty_ai_response_is_not_usable() {
    let resp = parse(r#"{"success": false, "ai_response": {}}"#);
    assert!(!resp.has_usable_data());
}

#[test]
fn populated_ai_response_is_usable_despite_failure_flag() {
    let resp = parse(r#"{"success": false, "ai_response": {"applicant_name": "Jane Doe"}}"#);
    assert!(resp.has_usable_data());
}

// =============================================================
// summary_line
// =============================================================

#[test]
fn summary_includes_applicant_name_on_success() {
    let resp = parse(
        r#"{"success": true, "ai_response": {"document_type": "passport", "applicant_name": "Jane Doe"}}"#,
    );
    let summary = resp.summary_line();
    assert!(summary.contains("Jane Doe"), "summary was: {summary}");
    assert_eq!(summary, "Successfully processed passport for Jane Doe");
}

#[test]
fn summary_falls_back_to_generic_nouns() {
    let resp = parse(r#"{"success": true}"#);
    assert_eq!(resp.summary_line(), "Successfully processed document for applicant");
}

#[test]
fn summary_flags_processing_issues_when_not_successful() {
    let resp = parse(r#"{"success": false, "ai_response": {"document_type": "resume"}}"#);
    assert_eq!(resp.summary_line(), "Warning: resume processing issues");
}

// =============================================================
// validity_reason precedence
// =============================================================

#[test]
fn top_level_validity_reason_wins() {
    let resp = parse(
        r#"{"validity_reason": "expired", "ai_response": {"validity_reason": "nested"}}"#,
    );
    assert_eq!(resp.validity_reason(), Some(&serde_json::json!("expired")));
}

#[test]
fn nested_validity_reason_used_when_top_level_absent() {
    let resp = parse(r#"{"ai_response": {"validity_reason": {"field": "photo"}}}"#);
    assert_eq!(
        resp.validity_reason(),
        Some(&serde_json::json!({"field": "photo"}))
    );
}

// =============================================================
// error_detail
// =============================================================

#[test]
fn error_detail_reads_detail_field() {
    assert_eq!(
        error_detail(r#"{"detail": "corrupt file"}"#),
        Some("corrupt file".to_owned())
    );
}

#[test]
fn error_detail_falls_back_to_error_field() {
    assert_eq!(
        error_detail(r#"{"error": "quota exceeded"}"#),
        Some("quota exceeded".to_owned())
    );
}

#[test]
fn error_detail_rejects_other_shapes() {
    assert_eq!(error_detail("not json"), None);
    assert_eq!(error_detail("{}"), None);
    assert_eq!(error_detail(r#"{"detail": 42}"#), None);
}
