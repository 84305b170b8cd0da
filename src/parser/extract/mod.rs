pub mod address;
pub mod contact;
pub mod experience;
pub mod name;
pub mod skills;

use super::ner::EntityRecognizer;
use super::record::ParsedRecord;

/// A guessed field value with its confidence score.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub value: String,
    pub score: u32,
}

/// Reduce candidates to the highest-scoring one; ties keep the first found.
pub(crate) fn pick_best(candidates: impl IntoIterator<Item = Candidate>) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for c in candidates {
        if best.as_ref().map_or(true, |b| c.score > b.score) {
            best = Some(c);
        }
    }
    best
}

/// Slice `radius` bytes either side of `center`, clamped to char boundaries.
pub(crate) fn text_window(text: &str, center: usize, radius: usize) -> &str {
    let mut start = center.saturating_sub(radius);
    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (center + radius).min(text.len());
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    &text[start..end]
}

/// Run every sub-extractor over the full text and assemble the record.
/// Extractors are independent; a miss in one never affects another.
pub fn extract_all(text: &str, recognizer: &dyn EntityRecognizer) -> ParsedRecord {
    ParsedRecord {
        name: name::extract(text, recognizer),
        email: contact::email(text),
        phone: contact::phone(text),
        address: address::extract(text, recognizer),
        linkedin: contact::linkedin(text),
        skills: skills::extract(text),
        experience: experience::extract(text),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ner::RuleRecognizer;
    use crate::parser::parse_text;

    fn parse_fixture(fixture: &str) -> ParsedRecord {
        let text = std::fs::read_to_string(format!("tests/fixtures/{}.txt", fixture)).unwrap();
        let recognizer = RuleRecognizer::new();
        parse_text(&text, &recognizer)
    }

    #[test]
    fn carter_resume() {
        let r = parse_fixture("carter");
        assert_eq!(r.name.as_deref(), Some("Emily J. Carter"));
        assert_eq!(r.email.as_deref(), Some("emily.carter@example.org"));
        assert_eq!(r.phone.as_deref(), Some("+1 (415) 555-0182"));
        assert_eq!(r.linkedin.as_deref(), Some("linkedin.com/in/emily-carter-dev"));
        let address = r.address.expect("address present");
        assert!(address.contains("742 Evergreen Terrace"), "got: {}", address);
        assert!(address.contains("Springfield"), "got: {}", address);
    }

    #[test]
    fn carter_skills() {
        let r = parse_fixture("carter");
        for skill in ["Python", "SQL", "Docker", "Kubernetes", "Flask", "PostgreSQL", "Git"] {
            assert!(r.skills.iter().any(|s| s == skill), "missing {}", skill);
        }
        // Multi-word catalog entries never match whole tokens.
        assert!(!r.skills.iter().any(|s| s == "Machine Learning"));
        for s in &r.skills {
            assert!(skills::SKILL_CATALOG.contains(&s.as_str()));
        }
    }

    #[test]
    fn carter_experience() {
        let r = parse_fixture("carter");
        assert_eq!(
            r.experience,
            vec![
                "Acme Analytics, Staff Engineer".to_string(),
                "Initech, Backend Developer".to_string(),
            ]
        );
    }

    #[test]
    fn contact_card() {
        let r = parse_fixture("card");
        assert_eq!(r.name.as_deref(), Some("John Smith"));
        assert_eq!(r.email.as_deref(), Some("john.smith@example.com"));
        assert_eq!(r.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(r.linkedin.as_deref(), Some("linkedin.com/in/johnsmith"));
        assert_eq!(r.address, None);
        assert!(r.skills.is_empty());
        assert!(r.experience.is_empty());
    }

    #[test]
    fn noise_yields_empty_record() {
        let r = parse_fixture("noise");
        assert!(r.is_empty(), "expected empty record, got: {:?}", r);
    }

    #[test]
    fn pipeline_terminates_on_degenerate_inputs() {
        let recognizer = RuleRecognizer::new();
        let long = "x".repeat(10_000);
        for text in ["", " ", "\n\n\n", "@@@###", "a", long.as_str()] {
            let r = parse_text(text, &recognizer);
            assert!(r.experience.iter().all(|e| !e.trim().is_empty()));
        }
    }

    #[test]
    fn pick_best_prefers_score_then_first() {
        let best = pick_best([
            Candidate { value: "a".into(), score: 5 },
            Candidate { value: "b".into(), score: 8 },
            Candidate { value: "c".into(), score: 8 },
        ])
        .unwrap();
        assert_eq!(best.value, "b");
    }

    #[test]
    fn text_window_respects_char_boundaries() {
        let text = "éééééééééé name: Zoé Durand éééééééééé";
        let center = text.find("name").unwrap();
        // Odd radius lands inside a two-byte char; must not panic.
        let w = text_window(text, center, 7);
        assert!(w.contains("name"));
    }
}
