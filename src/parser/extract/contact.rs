use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});
static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(https?://|www\.)?linkedin\.com/in/[a-zA-Z0-9_-]+").unwrap()
});

pub fn email(text: &str) -> Option<String> {
    first_match(&EMAIL_RE, text)
}

pub fn phone(text: &str) -> Option<String> {
    first_match(&PHONE_RE, text)
}

pub fn linkedin(text: &str) -> Option<String> {
    first_match(&LINKEDIN_RE, text)
}

fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().to_string())
}
