use serde::Serialize;

/// Best-effort structured record extracted from one document.
///
/// Scalar fields are `None` when no pattern matched. `skills` and
/// `experience` are always present, possibly empty.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linkedin: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
}

impl ParsedRecord {
    /// True when no extractor produced anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.linkedin.is_none()
            && self.skills.is_empty()
            && self.experience.is_empty()
    }
}
