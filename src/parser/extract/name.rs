use std::sync::LazyLock;

use regex::Regex;

use super::{pick_best, text_window, Candidate};
use crate::parser::ner::{EntityLabel, EntityRecognizer};

// Name-shaped patterns, most specific layouts first: "First Last" (optional
// hyphenated first, optional third word), "First M. Last", "First M Last".
static NAME_RES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"[A-Z][a-z]+(?:-[A-Z][a-z]+)? [A-Z][a-z]+(?: [A-Z][a-z]+)?").unwrap(),
        Regex::new(r"[A-Z][a-z]+ [A-Z]\. [A-Z][a-z]+").unwrap(),
        Regex::new(r"[A-Z][a-z]+ [A-Z] [A-Z][a-z]+").unwrap(),
    ]
});

static HONORIFIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:Mr\.|Ms\.|Dr\.|Prof\.|Mrs\.|Miss)\s*").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const NAME_KEYWORDS: &[&str] = &[
    "name", "contact", "profile", "summary", "personal", "about me", "introduction",
];

static KEYWORD_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    NAME_KEYWORDS
        .iter()
        .map(|kw| {
            (*kw, Regex::new(&format!(r"(?i)\b{}\b", regex::escape(kw))).unwrap())
        })
        .collect()
});

const KEYWORD_WINDOW: usize = 200;
const TOP_OF_DOCUMENT: usize = 500;

/// Best-guess personal name: entity tier, then keyword-window tier, then a
/// scan of the document head. Each tier emits scored candidates and the
/// reducer keeps the strongest.
pub fn extract(text: &str, recognizer: &dyn EntityRecognizer) -> Option<String> {
    let candidates = entity_candidate(text, recognizer)
        .into_iter()
        .chain(keyword_candidate(text))
        .chain(positional_candidate(text));
    pick_best(candidates).map(|c| normalize(&c.value))
}

/// Tier 1: first name-shaped match inside a PERSON entity. Score 10.
fn entity_candidate(text: &str, recognizer: &dyn EntityRecognizer) -> Option<Candidate> {
    for entity in recognizer.entities(text) {
        if entity.label != EntityLabel::Person {
            continue;
        }
        for re in NAME_RES.iter() {
            if let Some(m) = re.find(&entity.text) {
                return Some(Candidate {
                    value: m.as_str().to_string(),
                    score: 10,
                });
            }
        }
    }
    None
}

/// Tier 2: name-shaped matches near contextual keywords. Base 5, +3 for the
/// "name"/"contact" keywords, +2 when the match sits early in the window.
fn keyword_candidate(text: &str) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for (keyword, kw_re) in KEYWORD_RES.iter() {
        let keyword = *keyword;
        for m in kw_re.find_iter(text) {
            let window = text_window(text, m.start(), KEYWORD_WINDOW);
            for re in NAME_RES.iter() {
                if let Some(name_match) = re.find(window) {
                    let mut score = 5;
                    if keyword == "name" || keyword == "contact" {
                        score += 3;
                    }
                    if name_match.start() < 50 {
                        score += 2;
                    }
                    if best.as_ref().map_or(true, |b| score > b.score) {
                        best = Some(Candidate {
                            value: name_match.as_str().to_string(),
                            score,
                        });
                    }
                }
            }
        }
    }
    best
}

/// Tier 3: first name-shaped match in the document head. Score 1.
fn positional_candidate(text: &str) -> Option<Candidate> {
    let top = text_window(text, 0, TOP_OF_DOCUMENT);
    for re in NAME_RES.iter() {
        if let Some(m) = re.find(top) {
            return Some(Candidate {
                value: m.as_str().to_string(),
                score: 1,
            });
        }
    }
    None
}

/// Strip a leading honorific and collapse whitespace. Idempotent.
fn normalize(name: &str) -> String {
    let stripped = HONORIFIC_RE.replace(name.trim(), "");
    WS_RE.replace_all(stripped.trim(), " ").to_string()
}
