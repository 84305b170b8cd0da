use std::sync::LazyLock;

use regex::Regex;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)WORK EXPERIENCE|Professional Experience|Employment History|Employment")
        .unwrap()
});
static SECTION_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)EDUCATION|SKILLS|PROJECTS|REFERENCES").unwrap());

/// First line of every job entry under an experience header.
///
/// Each header's span runs to the next recognized section header or end of
/// text; entries split on blank lines. Multiple experience sections
/// concatenate in document order.
pub fn extract(text: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut pos = 0;

    while let Some(header) = HEADER_RE.find_at(text, pos) {
        let body_start = header.end();
        let rest = &text[body_start..];
        let body_len = SECTION_END_RE
            .find(rest)
            .map(|m| m.start())
            .unwrap_or(rest.len());

        for entry in rest[..body_len].trim().split("\n\n") {
            if let Some(first_line) = entry.lines().map(str::trim).find(|l| !l.is_empty()) {
                entries.push(first_line.to_string());
            }
        }

        // Continue past the captured span so headers inside it are consumed.
        pos = body_start + body_len;
    }

    entries
}
