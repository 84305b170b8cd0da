use std::sync::LazyLock;

use regex::Regex;

static PERSON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][a-z]+(?:-[A-Z][a-z]+)?(?: (?:[A-Z]\.?|[A-Z][a-z]+))? [A-Z][a-z]+").unwrap()
});
static CITY_STATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-z]+(?:[ -][A-Z][a-z]+)?),\s*([A-Z]{2})\b").unwrap()
});
static ZIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{5}(?:-\d{4})?\b").unwrap());
static STREET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b\d+ [A-Z][A-Za-z .]*?(?:Street|St|Avenue|Ave|Road|Rd|Drive|Dr|Lane|Ln|Boulevard|Blvd|Court|Ct|Way|Terrace|Ter|Place|Pl)\b\.?",
    )
    .unwrap()
});

// Capitalized words that start resume headings, titles, and degrees rather
// than personal names.
const NON_NAME_WORDS: &[&str] = &[
    "Engineer", "Engineering", "Developer", "Manager", "Director", "Analyst",
    "Architect", "Consultant", "Intern", "Specialist", "Technician", "Designer",
    "Researcher", "Scientist", "Senior", "Junior", "Staff", "Lead", "Principal",
    "Software", "Hardware", "Backend", "Frontend", "Data", "Web", "Cloud",
    "Mobile", "Product", "Project", "University", "College", "Institute",
    "School", "Academy", "Science", "Sciences", "Computer", "Bachelor",
    "Master", "Experience", "Education", "Skills", "Projects", "References",
    "Summary", "Objective", "Profile", "Contact", "Information", "Work",
    "Professional", "Employment", "History", "Certifications", "Languages",
    "Street", "Avenue", "Road", "Drive", "Lane", "Boulevard", "Court",
    "Terrace", "Place", "Suite", "Analytics", "Machine", "Learning", "Deep",
    "Natural", "Language", "Processing", "January", "February", "March",
    "April", "May", "June", "July", "August", "September", "October",
    "November", "December", "Present",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Person,
    Gpe,
    Loc,
    Fac,
}

#[derive(Debug, Clone)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

/// Capability seam for entity tagging. Built once at startup and shared by
/// reference; implementations must be read-only so documents can be
/// processed in parallel.
pub trait EntityRecognizer: Sync {
    /// Tagged entities in document order.
    fn entities(&self, text: &str) -> Vec<Entity>;
}

/// Rule-based tagger. Deliberately modest: it exists to feed the extraction
/// cascades, not to be an accurate NER model.
pub struct RuleRecognizer;

impl RuleRecognizer {
    pub fn new() -> Self {
        RuleRecognizer
    }
}

impl Default for RuleRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRecognizer for RuleRecognizer {
    fn entities(&self, text: &str) -> Vec<Entity> {
        let mut found: Vec<(usize, Entity)> = Vec::new();

        for m in PERSON_RE.find_iter(text) {
            if looks_like_name(m.as_str()) {
                found.push((
                    m.start(),
                    Entity {
                        text: m.as_str().to_string(),
                        label: EntityLabel::Person,
                    },
                ));
            }
        }

        for caps in CITY_STATE_RE.captures_iter(text) {
            let city = caps.get(1).unwrap();
            if !contains_non_name_word(city.as_str()) {
                found.push((
                    city.start(),
                    Entity {
                        text: city.as_str().to_string(),
                        label: EntityLabel::Gpe,
                    },
                ));
            }
            let state = caps.get(2).unwrap();
            found.push((
                state.start(),
                Entity {
                    text: state.as_str().to_string(),
                    label: EntityLabel::Gpe,
                },
            ));
        }

        for m in ZIP_RE.find_iter(text) {
            found.push((
                m.start(),
                Entity {
                    text: m.as_str().to_string(),
                    label: EntityLabel::Loc,
                },
            ));
        }

        for m in STREET_RE.find_iter(text) {
            found.push((
                m.start(),
                Entity {
                    text: m.as_str().to_string(),
                    label: EntityLabel::Fac,
                },
            ));
        }

        found.sort_by_key(|(start, _)| *start);
        found.into_iter().map(|(_, e)| e).collect()
    }
}

fn looks_like_name(span: &str) -> bool {
    !contains_non_name_word(span)
}

fn contains_non_name_word(span: &str) -> bool {
    span.split_whitespace()
        .map(|w| w.trim_matches('.'))
        .any(|w| NON_NAME_WORDS.contains(&w))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels_of(text: &str, label: EntityLabel) -> Vec<String> {
        RuleRecognizer::new()
            .entities(text)
            .into_iter()
            .filter(|e| e.label == label)
            .map(|e| e.text)
            .collect()
    }

    #[test]
    fn tags_person() {
        let people = labels_of("prepared by Jane Doe for review", EntityLabel::Person);
        assert_eq!(people, vec!["Jane Doe"]);
    }

    #[test]
    fn tags_person_with_middle_initial() {
        let people = labels_of("Emily J. Carter\nSenior Software Engineer", EntityLabel::Person);
        assert_eq!(people, vec!["Emily J. Carter"]);
    }

    #[test]
    fn rejects_heading_shaped_spans() {
        assert!(labels_of("Work Experience", EntityLabel::Person).is_empty());
        assert!(labels_of("Senior Software Engineer", EntityLabel::Person).is_empty());
        assert!(labels_of("Machine Learning", EntityLabel::Person).is_empty());
    }

    #[test]
    fn tags_city_and_state() {
        let gpes = labels_of("based in Springfield, IL since long ago", EntityLabel::Gpe);
        assert_eq!(gpes, vec!["Springfield", "IL"]);
    }

    #[test]
    fn tags_street_and_zip() {
        let text = "742 Evergreen Terrace, Springfield, IL 62704";
        assert_eq!(labels_of(text, EntityLabel::Fac), vec!["742 Evergreen Terrace"]);
        assert_eq!(labels_of(text, EntityLabel::Loc), vec!["62704"]);
    }

    #[test]
    fn entities_in_document_order() {
        let ents = RuleRecognizer::new().entities("Jane Doe lives in Austin, TX 78701");
        let texts: Vec<&str> = ents.iter().map(|e| e.text.as_str()).collect();
        let jane = texts.iter().position(|t| *t == "Jane Doe").unwrap();
        let zip = texts.iter().position(|t| *t == "78701").unwrap();
        assert!(jane < zip);
    }
}
