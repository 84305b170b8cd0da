use std::sync::LazyLock;

use regex::Regex;

use super::text_window;
use crate::parser::ner::{EntityLabel, EntityRecognizer};

const ADDRESS_KEYWORDS: &[&str] = &[
    "address",
    "location",
    "residence",
    "contact information",
    "mailing address",
    "place of residence",
    "current location",
];

static KEYWORD_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ADDRESS_KEYWORDS
        .iter()
        .map(|kw| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(kw))).unwrap())
        .collect()
});

// US street line + city + state + ZIP, captured as components.
static COMPONENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\d+\s+[A-Za-z][A-Za-z .]*?(?:Street|St|Avenue|Ave|Road|Rd|Drive|Dr|Lane|Ln|Boulevard|Blvd|Court|Ct|Way|Terrace|Ter|Place|Pl)\b\.?),\s*([A-Za-z][A-Za-z .]*?),\s*([A-Z]{2})\s+(\d{5}(?:-\d{4})?)",
    )
    .unwrap()
});

// Tightening cascade for the joined entity string, full street address down
// to a bare ZIP or place name.
static TIGHTEN_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\d+\s+[\w\s.-]+(?:(?:apt|suite|#)\s*\d+)?,\s*[\w\s.-]+(?:,\s*[A-Z]{2})?(?:,\s*[A-Za-z]+)?\s*\d{5}(?:-\d{4})?",
        r"(?i)\d+\s+[\w\s.-]+(?:(?:apt|suite|#)\s*\d+)?,\s*[\w\s.-]+(?:,\s*[A-Z]{2})?(?:,\s*[A-Za-z]+)?",
        r"(?i)[\w\s.-]+,\s*[A-Z]{2}\s*\d{5}(?:,\s*[A-Za-z]+)?",
        r"(?i)[\w\s.-]+,\s*[A-Z]{2}(?:,\s*[A-Za-z]+)?",
        r"(?i)\d+\s+[\w\s.-]+(?:(?:apt|suite|#)\s*\d+)?",
        r"(?i)\d{5}",
        r"(?i)[A-Za-z]+(?:,\s*[A-Za-z]+)?",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static TRAILING_PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,.]+$").unwrap());

// Date-range shapes stripped in descending specificity. Word-bounded so a
// ZIP's digits are left alone.
static DATE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b\d{4}\s*-\s*[A-Za-z]+\s*\d{4}\b",
        r"\b\d{4}\s*-\s*\d{4}\b",
        r"\b[A-Za-z]+\s*\d{4}\b",
        r"\b\d{4}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

const KEYWORD_WINDOW: usize = 300;

/// Best-guess address fragment, or `None` when every tier misses.
pub fn extract(text: &str, recognizer: &dyn EntityRecognizer) -> Option<String> {
    let scope = narrow(text);
    let raw = parse_components(scope)
        .map(|components| components.join(", "))
        .or_else(|| entity_guess(scope, recognizer));
    raw.and_then(|r| cleanup(&r))
}

/// Narrow to a window around the first address keyword, if any.
fn narrow(text: &str) -> &str {
    for re in KEYWORD_RES.iter() {
        if let Some(m) = re.find(text) {
            return text_window(text, m.start(), KEYWORD_WINDOW);
        }
    }
    text
}

/// Structured-parse attempt. `None` means the shape was not recognized and
/// the caller falls through to the entity tier.
fn parse_components(text: &str) -> Option<Vec<String>> {
    COMPONENT_RE.captures(text).map(|caps| {
        (1..=4)
            .filter_map(|i| caps.get(i))
            .map(|m| m.as_str().trim().to_string())
            .collect()
    })
}

/// Join GPE/LOC/FAC entity texts, then tighten against the address cascade.
fn entity_guess(text: &str, recognizer: &dyn EntityRecognizer) -> Option<String> {
    let parts: Vec<String> = recognizer
        .entities(text)
        .into_iter()
        .filter(|e| {
            matches!(
                e.label,
                EntityLabel::Gpe | EntityLabel::Loc | EntityLabel::Fac
            )
        })
        .map(|e| e.text)
        .collect();
    if parts.is_empty() {
        return None;
    }

    let joined = parts.join(", ");
    for re in TIGHTEN_RES.iter() {
        if let Some(m) = re.find(&joined) {
            return Some(m.as_str().to_string());
        }
    }
    Some(joined)
}

/// Collapse whitespace, drop trailing punctuation and date ranges, dedupe
/// comma-separated segments. `None` when nothing survives.
fn cleanup(raw: &str) -> Option<String> {
    let mut value = WS_RE.replace_all(raw, " ").trim().to_string();
    value = TRAILING_PUNCT_RE.replace(&value, "").trim().to_string();
    for re in DATE_RES.iter() {
        value = re.replace_all(&value, "").trim().to_string();
    }

    let mut seen = Vec::new();
    for segment in value.split(", ") {
        let segment = segment.trim();
        if !segment.is_empty() && !seen.iter().any(|s| s == segment) {
            seen.push(segment.to_string());
        }
    }

    if seen.is_empty() {
        None
    } else {
        Some(seen.join(", "))
    }
}
