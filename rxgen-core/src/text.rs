//! Text patching primitives.

/// Place `segment` in front of `existing`.
///
/// The existing text follows the segment byte for byte; nothing is trimmed
/// or inserted between the two.
pub fn prepend(segment: &str, existing: &str) -> String {
    let mut out = String::with_capacity(segment.len() + existing.len());
    out.push_str(segment);
    out.push_str(existing);
    out
}

/// Check whether `text` contains `line` as a whole line.
///
/// `line` is compared without its trailing newline, and lines of `text` are
/// compared without their line terminator (`\n` or `\r\n`).
pub fn contains_line(text: &str, line: &str) -> bool {
    let needle = line.trim_end_matches(['\r', '\n']);
    if needle.is_empty() {
        return false;
    }
    text.lines().any(|l| l == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepend_keeps_existing_bytes() {
        assert_eq!(
            prepend("from .b import B\n", "from .a import A\n"),
            "from .b import B\nfrom .a import A\n"
        );
        assert_eq!(prepend("new\n", ""), "new\n");
        assert_eq!(prepend("new\n", "no trailing newline"), "new\nno trailing newline");
        assert_eq!(prepend("new\n", "\r\nwindows\r\n"), "new\n\r\nwindows\r\n");
    }

    #[test]
    fn test_contains_line() {
        let text = "from .user import User\r\nfrom .post import Post\n";
        assert!(contains_line(text, "from .user import User\n"));
        assert!(contains_line(text, "from .post import Post"));
        assert!(!contains_line(text, "from .po import Po\n"));
        assert!(!contains_line("# from .user import User\n", "from .user import User\n"));
        assert!(!contains_line(text, "\n"));
    }
}
