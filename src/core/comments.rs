use regex::Regex;
use std::sync::LazyLock;

static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)/\*.*?\*/").expect("block comment pattern is valid")
});

/// Removes `/* ... */` blocks, then cuts every line at its first `//`.
///
/// Markers inside string literals are treated as real comments; the scanner
/// does not tokenize.
pub fn strip_comments(content: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(content, "");

    without_blocks
        .split('\n')
        .map(|line| match line.find("//") {
            Some(pos) => &line[..pos],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
