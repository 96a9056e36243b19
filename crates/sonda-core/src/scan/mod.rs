//! Marker and span location inside program sources.
//!
//! The cache declarations live in TypeScript route files, so the bracketed
//! span after a marker cannot be cut at the first `]`: array literals nest,
//! string literals may contain brackets, and so may comments. The scanner
//! walks bytes with a small state machine and returns the span up to the
//! MATCHING close bracket.

/// Offset just past the `=` of the first `<name> =` declaration.
/// Tolerates spaces and tabs between the name and the `=`.
pub fn find_marker(content: &str, name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }
    let mut start = 0;
    while let Some(pos) = content[start..].find(name) {
        let at = start + pos;
        let rest = &content[at + name.len()..];
        let trimmed = rest.trim_start_matches([' ', '\t']);
        if trimmed.starts_with('=') {
            let ws = rest.len() - trimmed.len();
            return Some(at + name.len() + ws + 1);
        }
        start = at + name.len();
    }
    None
}

enum State {
    Code,
    Str(u8),
    Escape(u8),
    LineComment,
    BlockComment,
}

/// The first balanced `[` .. `]` span at or after `from`, brackets included.
/// `None` when no `[` follows or the span never closes.
pub fn bracketed_span(content: &str, from: usize) -> Option<&str> {
    let open = content[from..].find('[').map(|i| from + i)?;
    let bytes = content.as_bytes();
    let mut depth = 0usize;
    let mut state = State::Code;
    let mut i = open;
    while i < bytes.len() {
        let b = bytes[i];
        state = match state {
            State::Code => match b {
                b'[' => {
                    depth += 1;
                    State::Code
                }
                b']' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&content[open..=i]);
                    }
                    State::Code
                }
                b'\'' | b'"' | b'`' => State::Str(b),
                b'/' if bytes.get(i + 1) == Some(&b'/') => {
                    i += 1;
                    State::LineComment
                }
                b'/' if bytes.get(i + 1) == Some(&b'*') => {
                    i += 1;
                    State::BlockComment
                }
                _ => State::Code,
            },
            State::Str(q) => match b {
                b'\\' => State::Escape(q),
                _ if b == q => State::Code,
                _ => State::Str(q),
            },
            State::Escape(q) => State::Str(q),
            State::LineComment => {
                if b == b'\n' {
                    State::Code
                } else {
                    State::LineComment
                }
            }
            State::BlockComment => {
                if b == b'*' && bytes.get(i + 1) == Some(&b'/') {
                    i += 1;
                    State::Code
                } else {
                    State::BlockComment
                }
            }
        };
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{bracketed_span, find_marker};

    #[test]
    fn marker_tolerates_whitespace_before_equals() {
        assert_eq!(find_marker("cacheFijo = []", "cacheFijo"), Some(11));
        assert_eq!(find_marker("cacheFijo\t =[]", "cacheFijo"), Some(12));
        assert!(find_marker("cacheFijo.push(x)", "cacheFijo").is_none());
    }

    #[test]
    fn marker_skips_non_assignment_occurrences() {
        let src = "use(cacheFijo); cacheFijo = [1]";
        let at = find_marker(src, "cacheFijo").expect("marker");
        assert_eq!(&src[at..], " [1]");
    }

    #[test]
    fn span_handles_nesting() {
        let src = "x = [[1,2],[3]] // tail";
        assert_eq!(bracketed_span(src, 0), Some("[[1,2],[3]]"));
    }

    #[test]
    fn span_ignores_brackets_in_strings() {
        let src = r#"cache.noticias = ["a]b", 'c]d', 2]"#;
        assert_eq!(bracketed_span(src, 0), Some(r#"["a]b", 'c]d', 2]"#));
    }

    #[test]
    fn span_ignores_escaped_quote_inside_string() {
        let src = r#"x = ["he said \"]\"", 1]"#;
        assert_eq!(bracketed_span(src, 0), Some(r#"["he said \"]\"", 1]"#));
    }

    #[test]
    fn span_ignores_brackets_in_comments() {
        let src = "x = [1, // not ]\n 2, /* ] */ 3]";
        assert_eq!(bracketed_span(src, 0), Some("[1, // not ]\n 2, /* ] */ 3]"));
    }

    #[test]
    fn unterminated_span_is_none() {
        assert!(bracketed_span("x = [1, 2", 0).is_none());
        assert!(bracketed_span("no brackets here", 0).is_none());
    }
}
