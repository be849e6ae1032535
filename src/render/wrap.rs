/// Greedy character-count word wrap.
///
/// Words are separated by single spaces. When appending the next word (plus its separating space)
/// would push the buffer past `width` characters, the buffer is flushed as a line and the word
/// starts a new one. A word longer than `width` is emitted whole on its own line, never cut.
/// Widths count Unicode scalar values, not pixels.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if line_chars == 0 {
            line.push_str(word);
            line_chars = word_chars;
        } else if line_chars + 1 + word_chars > width {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_chars = word_chars;
        } else {
            line.push(' ');
            line.push_str(word);
            line_chars += 1 + word_chars;
        }
    }

    if line_chars > 0 {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/render/wrap.rs"]
mod tests;
