use super::*;

#[test]
fn scale_tracks_font_size() {
    assert_eq!(scale_for(60.0), 8);
    assert_eq!(scale_for(40.0), 5);
    assert_eq!(scale_for(2.0), 1);
}

#[test]
fn space_is_blank_and_letters_are_not() {
    assert_eq!(glyph_rows(' '), [0; 8]);
    assert!(glyph_rows('A').iter().any(|r| *r != 0));
}

#[test]
fn unknown_chars_fall_back_to_question_mark() {
    assert_eq!(glyph_rows('\u{1F600}'), glyph_rows('?'));
}

#[test]
fn row_runs_merge_adjacent_bits() {
    assert!(row_runs(0).is_empty());
    assert_eq!(row_runs(0xFF), vec![(0, 8)]);
    assert_eq!(row_runs(0b0000_0110), vec![(1, 2)]);
    assert_eq!(row_runs(0b1000_0001), vec![(0, 1), (7, 1)]);
}
