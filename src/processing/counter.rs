// src/processing/counter.rs

/// Counts `\n`-separated segments in `content`.
///
/// The count is the number of pieces produced by splitting on `\n`, so an
/// empty string counts as one line and a trailing newline adds one more.
/// Reports from earlier runs rely on this exact rule for comparison.
///
/// # Examples
///
/// ```
/// use project_scanner::count_lines;
///
/// assert_eq!(count_lines(""), 1);
/// assert_eq!(count_lines("one line"), 1);
/// assert_eq!(count_lines("a\nb"), 2);
/// assert_eq!(count_lines("a\nb\n"), 3);
/// ```
#[inline]
pub fn count_lines(content: &str) -> usize {
    content.split('\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_one_line() {
        assert_eq!(count_lines(""), 1);
    }

    #[test]
    fn test_no_trailing_newline() {
        assert_eq!(count_lines("0123456789"), 1);
        assert_eq!(count_lines("one\ntwo\nthree"), 3);
    }

    #[test]
    fn test_trailing_newline_counts_extra_segment() {
        assert_eq!(count_lines("one\n"), 2);
        assert_eq!(count_lines("\n\n"), 3);
    }

    #[test]
    fn test_crlf_counts_only_lf() {
        assert_eq!(count_lines("a\r\nb\r\n"), 3);
        assert_eq!(count_lines("a\rb"), 1);
    }
}
