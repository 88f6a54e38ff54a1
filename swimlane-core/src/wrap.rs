//! Greedy word wrapping for captions

/// Wrap `text` into lines of at most `width` characters.
///
/// All input whitespace (spaces, tabs, embedded newlines) is normalized to
/// single spaces before wrapping, and breaks happen only on whitespace
/// boundaries. A single word longer than `width` is kept unmodified on its
/// own line. Pure and deterministic: the same inputs always yield the same
/// line sequence.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::wrap;
    use pretty_assertions::assert_eq;

    #[test]
    fn wraps_on_whitespace_within_width() {
        let lines = wrap("Edge cache lookup via caches.default.match", 20);
        assert_eq!(lines, vec!["Edge cache lookup", "via", "caches.default.match"]);
        for line in &lines {
            assert!(line.chars().count() <= 20 || !line.contains(' '));
        }
    }

    #[test]
    fn rejoining_reproduces_normalized_text() {
        let text = "Build cache key\n(pc/dataset/max + allow-list hash)\tCanonicalise path";
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(wrap(text, 18).join(" "), normalized);
    }

    #[test]
    fn long_word_occupies_its_own_line() {
        let lines = wrap("see /search/places/v1/postcode endpoint", 10);
        assert!(lines.contains(&"/search/places/v1/postcode".to_string()));
    }

    #[test]
    fn empty_and_blank_input_yield_no_lines() {
        assert_eq!(wrap("", 40), Vec::<String>::new());
        assert_eq!(wrap("   \n\t ", 40), Vec::<String>::new());
    }

    #[test]
    fn single_short_word_is_one_line() {
        assert_eq!(wrap("OK", 50), vec!["OK"]);
    }
}
