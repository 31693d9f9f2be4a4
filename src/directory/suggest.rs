use super::engine::name_matches;
use crate::source::types::Doctor;

pub const MAX_SUGGESTIONS: usize = 5;

/// First `MAX_SUGGESTIONS` doctors, in list order, whose name contains `search`.
///
/// Independent of every other filter. Empty search yields nothing.
pub fn suggestions(doctors: &[Doctor], search: &str) -> Vec<Doctor> {
    if search.is_empty() {
        return Vec::new();
    }

    let needle = search.to_lowercase();
    doctors
        .iter()
        .filter(|doctor| name_matches(&doctor.name, &needle))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

/// Search box with live suggestions.
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    text: String,
    suggestions: Vec<Doctor>,
}

impl SearchBox {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn suggestions(&self) -> &[Doctor] {
        &self.suggestions
    }

    /// Typing: replaces the text and recomputes suggestions.
    pub fn input(&mut self, text: impl Into<String>, doctors: &[Doctor]) {
        self.text = text.into();
        self.refresh(doctors);
    }

    /// Data arrived or changed underneath the box.
    pub fn refresh(&mut self, doctors: &[Doctor]) {
        self.suggestions = suggestions(doctors, &self.text);
    }

    /// Picking a suggestion: the search becomes the doctor's full name and the list closes.
    pub fn select(&mut self, doctor: &Doctor) {
        self.text = doctor.name.clone();
        self.suggestions.clear();
    }
}
