use super::*;

#[test]
fn long_word_is_emitted_whole() {
    assert_eq!(wrap_words("abcdefghij", 9), vec!["abcdefghij"]);
}

#[test]
fn long_word_splits_from_neighbours() {
    assert_eq!(
        wrap_words("ab abcdefghij cd", 9),
        vec!["ab", "abcdefghij", "cd"]
    );
}

#[test]
fn exact_fit_stays_on_line() {
    // "abcd efgh" is exactly 9 chars.
    assert_eq!(wrap_words("abcd efgh ij", 9), vec!["abcd efgh", "ij"]);
}

#[test]
fn runs_of_whitespace_collapse() {
    assert_eq!(wrap_words("  a \n  b\tc  ", 40), vec!["a b c"]);
}

#[test]
fn empty_text_has_no_lines() {
    assert!(wrap_words("", 10).is_empty());
    assert!(wrap_words("   ", 10).is_empty());
}

#[test]
fn width_counts_chars_not_bytes() {
    assert_eq!(wrap_words("äöü äöü", 7), vec!["äöü äöü"]);
    assert_eq!(wrap_words("äöü äöü", 6), vec!["äöü", "äöü"]);
}

#[test]
fn greedy_fill() {
    let lines = wrap_words("the quick brown fox jumps over the lazy dog", 10);
    assert_eq!(
        lines,
        vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]
    );
    assert!(lines.iter().all(|l| l.chars().count() <= 10));
}
