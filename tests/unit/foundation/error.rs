use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(SlideError::parse("x").to_string().contains("parse error:"));
    assert!(SlideError::render("x").to_string().contains("render error:"));
    assert!(SlideError::input("x").to_string().contains("input error:"));
    assert!(SlideError::encode("x").to_string().contains("encode error:"));
    assert!(SlideError::config("x").to_string().contains("config error:"));
}

#[test]
fn kind_names_match_variants() {
    assert_eq!(SlideError::parse("x").kind(), "parse");
    assert_eq!(SlideError::render("x").kind(), "render");
    assert_eq!(SlideError::input("x").kind(), "input");
    assert_eq!(SlideError::encode("x").kind(), "encode");
    assert_eq!(SlideError::config("x").kind(), "config");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SlideError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert_eq!(err.kind(), "other");
}
