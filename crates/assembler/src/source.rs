//! Comment stripping.
//!
//! A comment starts at the first `;` or `//` on a line, whichever comes
//! first, and runs to the end of the line. There is no escape: a marker
//! inside an operand still starts a comment.

/// Single-character comment marker.
pub const LINE_COMMENT: char = ';';
/// Two-character comment marker.
pub const SLASH_COMMENT: &str = "//";

/// A source line with its comment removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// Text before the comment marker (untrimmed).
    pub text: &'a str,
    /// 1-indexed line number.
    pub line: usize,
}

/// Returns `line` up to its first comment marker.
#[must_use]
pub fn strip_comment(line: &str) -> &str {
    let semicolon = line.find(LINE_COMMENT);
    let slashes = line.find(SLASH_COMMENT);
    let cut = match (semicolon, slashes) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    };
    cut.map_or(line, |at| &line[..at])
}

/// Splits `source` on newlines and strips the comment from each line.
#[must_use]
pub fn preprocess(source: &str) -> Vec<SourceLine<'_>> {
    source
        .split('\n')
        .enumerate()
        .map(|(idx, text)| SourceLine {
            text: strip_comment(text),
            line: idx + 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{preprocess, strip_comment};

    #[rstest]
    #[case("KA ; read key", "KA ")]
    #[case("KA // read key", "KA ")]
    #[case("KA", "KA")]
    #[case("; whole line", "")]
    #[case("// whole line", "")]
    #[case("TIA 1 ; a // b", "TIA 1 ")]
    #[case("TIA 1 // a ; b", "TIA 1 ")]
    #[case("TIA 1;2", "TIA 1")]
    #[case("TIA /1", "TIA /1")]
    fn strips_from_earliest_marker(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(strip_comment(line), expected);
    }

    #[test]
    fn preprocess_keeps_line_numbers() {
        let lines = preprocess("KA\n; note\n  AO // show\n");
        let texts: Vec<_> = lines.iter().map(|l| (l.line, l.text)).collect();
        assert_eq!(texts, vec![(1, "KA"), (2, ""), (3, "  AO "), (4, "")]);
    }

    #[test]
    fn preprocess_keeps_carriage_returns_for_the_tokenizer() {
        let lines = preprocess("KA\r\nAO\r\n");
        assert_eq!(lines[0].text, "KA\r");
        assert_eq!(lines[1].text, "AO\r");
    }
}
