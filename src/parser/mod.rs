pub mod extract;
pub mod ner;
pub mod record;

use ner::EntityRecognizer;
use record::ParsedRecord;

/// Single-pass pipeline: raw text → independent sub-extractors → record.
/// Pure apart from read-only use of the injected recognizer, so callers may
/// fan documents out across threads.
pub fn parse_text(text: &str, recognizer: &dyn EntityRecognizer) -> ParsedRecord {
    extract::extract_all(text, recognizer)
}
