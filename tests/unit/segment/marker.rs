use super::*;

#[test]
fn k_blocks_yield_k_records_in_order() {
    let text: String = (1..=5)
        .map(|i| format!("[SLIDE_START][TITLE_START]T{i}[TITLE_END]body {i}[SLIDE_END]\n"))
        .collect();
    let slides = parse(&text);
    assert_eq!(slides.len(), 5);
    for (i, s) in slides.iter().enumerate() {
        assert_eq!(s.title(), format!("T{}", i + 1));
        assert_eq!(s.body_lines(), [format!("body {}", i + 1)]);
    }
}

#[test]
fn title_is_optional() {
    let slides = parse("[SLIDE_START]  just body  [SLIDE_END]");
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].title(), "");
    assert_eq!(slides[0].body_lines(), ["just body"]);
}

#[test]
fn body_is_split_on_blank_lines() {
    let slides = parse(
        "[SLIDE_START]\n[TITLE_START] Plan [TITLE_END]\nfirst point\ncontinued\n\nsecond point\n[SLIDE_END]",
    );
    assert_eq!(slides[0].title(), "Plan");
    assert_eq!(
        slides[0].body_lines(),
        ["first point\ncontinued", "second point"]
    );
}

#[test]
fn title_only_slide_is_kept() {
    let slides = parse("[SLIDE_START][TITLE_START]Thanks[TITLE_END]   [SLIDE_END]");
    assert_eq!(slides.len(), 1);
    assert!(slides[0].body_lines().is_empty());
}

#[test]
fn whitespace_only_blocks_are_dropped() {
    let slides = parse(
        "[SLIDE_START] \n [SLIDE_END][SLIDE_START][TITLE_START] [TITLE_END][SLIDE_END]\
         [SLIDE_START]kept[SLIDE_END]",
    );
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].body_lines(), ["kept"]);
}

#[test]
fn every_title_pair_is_removed_first_wins() {
    let slides = parse(
        "[SLIDE_START][TITLE_START]A[TITLE_END]x [TITLE_START]B[TITLE_END]y[SLIDE_END]",
    );
    assert_eq!(slides[0].title(), "A");
    assert_eq!(slides[0].body_lines(), ["x y"]);
}

#[test]
fn unterminated_trailing_block_is_ignored() {
    let slides = parse("[SLIDE_START]one[SLIDE_END] noise [SLIDE_START]two");
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].body_lines(), ["one"]);
}

#[test]
fn adjacent_blocks_do_not_merge() {
    let slides = parse("[SLIDE_START]a[SLIDE_END][SLIDE_START]b[SLIDE_END]");
    assert_eq!(slides.len(), 2);
}
