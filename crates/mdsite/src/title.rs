//! Page title extraction.

use crate::{Error, Result};

/// Extract the text of the first level-1 heading.
///
/// A line qualifies when, after leading whitespace, it starts with `# `.
/// `##`, `#Word` and a `#` in the middle of a line do not qualify.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find_map(|line| line.trim_start().strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(Error::NoTitleFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Hello", "Hello")]
    #[case("#   Hello world   ", "Hello world")]
    #[case("## Sub\n### Deep\n# Real Title", "Real Title")]
    #[case("# First\n\nSome text\n\n# Second", "First")]
    #[case("   # Indented Title", "Indented Title")]
    #[case("# Title\r\n\r\nBody", "Title")]
    fn test_extract_title(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(extract_title(markdown).unwrap(), expected);
    }

    #[rstest]
    #[case("## Not top level\nSome text")]
    #[case("")]
    #[case("#Hello (not valid h1)\nText")]
    #[case("Text before # Not a header")]
    fn test_no_title(#[case] markdown: &str) {
        assert_eq!(extract_title(markdown), Err(Error::NoTitleFound));
    }
}
