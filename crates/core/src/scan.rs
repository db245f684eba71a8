/// A single scanned segment of the template.
pub enum Segment<'a> {
    /// Literal text, emitted verbatim.
    Literal(&'a str),
    /// The raw content of a `{{ ... }}` span (exclusive of the braces).
    Expression(&'a str),
}

/// Scan a template into alternating literal and expression segments. An
/// unmatched `{{` (no following `}}`) is emitted as a literal, orphan brace
/// included, rather than erroring.
pub fn scan(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        if open > 0 {
            segments.push(Segment::Literal(&rest[..open]));
        }
        let after_open = &rest[open + 2..];
        match after_open.find("}}") {
            Some(close) => {
                segments.push(Segment::Expression(&after_open[..close]));
                rest = &after_open[close + 2..];
            }
            None => {
                segments.push(Segment::Literal(&rest[open..]));
                rest = "";
                break;
            }
        }
    }
    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(segments: &[Segment<'_>]) -> Vec<&str> {
        segments
            .iter()
            .map(|s| match s {
                Segment::Literal(s) | Segment::Expression(s) => *s,
            })
            .collect()
    }

    #[test]
    fn test_no_braces_is_single_literal() {
        let segments = scan("hello world");
        assert_eq!(render(&segments), vec!["hello world"]);
        assert!(matches!(segments[0], Segment::Literal(_)));
    }

    #[test]
    fn test_unmatched_open_brace_passes_through() {
        let segments = scan("{{user.userid");
        assert_eq!(render(&segments), vec!["{{user.userid"]);
        assert!(matches!(segments[0], Segment::Literal(_)));
    }

    #[test]
    fn test_multiple_spans() {
        let segments = scan("Hello {{user.name}}, you are {{user.age}} years old");
        assert_eq!(
            render(&segments),
            vec!["Hello ", "user.name", ", you are ", "user.age", " years old"]
        );
    }

    #[test]
    fn test_preserves_unicode_line_separators() {
        let template = "a\u{2028}{{x}}\u{2029}b";
        let segments = scan(template);
        assert_eq!(render(&segments), vec!["a\u{2028}", "x", "\u{2029}b"]);
    }
}
