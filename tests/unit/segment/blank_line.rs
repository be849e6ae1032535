use super::*;

#[test]
fn blocks_become_slides_with_title_line() {
    let slides = parse("Intro\nHello\nworld\n\n\n\nEnd\n  Bye  \n");
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].title(), "Intro");
    assert_eq!(slides[0].body_lines(), ["Hello", "world"]);
    assert_eq!(slides[1].title(), "End");
    assert_eq!(slides[1].body_lines(), ["Bye"]);
}

#[test]
fn single_newlines_stay_in_one_slide() {
    let slides = parse("a\nb\nc");
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].body_lines(), ["b", "c"]);
}

#[test]
fn whitespace_blocks_are_dropped() {
    assert!(parse("  \n\n \t \n\n").is_empty());
}

#[test]
fn whitespace_only_line_does_not_separate_blocks() {
    let slides = parse("A\n \nB");
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].title(), "A");
    assert_eq!(slides[0].body_lines(), ["B"]);
}

#[test]
fn runs_of_newlines_separate_blocks() {
    let slides = parse("A\n\n\nB\n\n\n\nC");
    let titles: Vec<&str> = slides.iter().map(|s| s.title()).collect();
    assert_eq!(titles, ["A", "B", "C"]);
}
