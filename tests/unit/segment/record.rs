use super::*;

fn legacy(json: &str) -> SlideResult<SlideRecord> {
    SlideRecord::from_legacy(serde_json::from_str(json).unwrap())
}

#[test]
fn serializes_as_title_and_body() {
    let r = SlideRecord::new("Intro", vec!["Hello world".to_string()]);
    assert_eq!(
        serde_json::to_value(&r).unwrap(),
        serde_json::json!({ "title": "Intro", "body": ["Hello world"] })
    );
}

#[test]
fn legacy_plain_string() {
    let r = legacy(r#""Intro\nline one\n\nline two""#).unwrap();
    assert_eq!(r.title(), "Intro");
    assert_eq!(r.body_lines(), ["line one", "line two"]);
}

#[test]
fn legacy_title_content_mapping() {
    let r = legacy(r#"{"title":" Intro ","content":"para one\n\npara two"}"#).unwrap();
    assert_eq!(r.title(), "Intro");
    assert_eq!(r.body_lines(), ["para one", "para two"]);
}

#[test]
fn legacy_body_list() {
    let r = legacy(r#"{"title":"T","body":["a"," ","b"]}"#).unwrap();
    assert_eq!(r.body_lines(), ["a", "b"]);
}

#[test]
fn legacy_rejects_blank_and_ambiguous_shapes() {
    assert_eq!(legacy(r#"{}"#).unwrap_err().kind(), "input");
    assert_eq!(legacy(r#""   ""#).unwrap_err().kind(), "input");
    assert!(legacy(r#"{"title":"T","body":"a","content":"b"}"#).is_err());
}

#[test]
fn legacy_list_reports_position() {
    let slides: Vec<LegacySlide> = serde_json::from_str(r#"["ok", {}]"#).unwrap();
    let err = SlideRecord::from_legacy_list(slides).unwrap_err();
    assert!(err.to_string().contains("slide #2"));
}

#[test]
fn blank_detection() {
    assert!(SlideRecord::new(" ", vec![" ".to_string()]).is_blank());
    assert!(!SlideRecord::new("", vec!["x".to_string()]).is_blank());
}
