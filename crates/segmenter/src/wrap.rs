use crate::LINE_WIDTH;

fn truncate_chars(word: &str, width: usize) -> String {
    word.chars().take(width).collect()
}

/// Greedily packs whitespace-separated words into lines no longer than [`LINE_WIDTH`]. A single
/// word longer than `LINE_WIDTH` is hard-truncated to `LINE_WIDTH` characters; the remainder of
/// that word is dropped.
pub fn wrap(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = if word.chars().count() > LINE_WIDTH { truncate_chars(word, LINE_WIDTH) } else { word.to_string() };

        if current.is_empty() {
            current = word;
            continue;
        }

        if current.chars().count() + 1 + word.chars().count() <= LINE_WIDTH {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_short_words_onto_one_line() {
        assert_eq!(wrap("a short line"), vec!["a short line".to_string()]);
    }

    #[test]
    fn wraps_at_line_width() {
        let text = "word ".repeat(10);
        let lines = wrap(text.trim());
        for line in &lines {
            assert!(line.chars().count() <= LINE_WIDTH);
        }
    }

    #[test]
    fn hard_truncates_an_overlong_word() {
        let long_word = "x".repeat(LINE_WIDTH + 10);
        let lines = wrap(&long_word);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].chars().count(), LINE_WIDTH);
    }

    #[test]
    fn empty_text_yields_no_lines() {
        assert!(wrap("").is_empty());
        assert!(wrap("   ").is_empty());
    }
}
