use serde::Serialize;
use std::fmt;

/// Consultation mode selector.
///
/// Unrecognized values are kept so they survive a URL round-trip, but match no doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum ConsultationMode {
    Video,
    Clinic,
    Other(String),
}

impl ConsultationMode {
    /// Parses a query value. Empty input means the dimension is unset.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "video" => Some(ConsultationMode::Video),
            "clinic" => Some(ConsultationMode::Clinic),
            other => Some(ConsultationMode::Other(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ConsultationMode::Video => "video",
            ConsultationMode::Clinic => "clinic",
            ConsultationMode::Other(raw) => raw,
        }
    }
}

impl fmt::Display for ConsultationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ConsultationMode> for String {
    fn from(mode: ConsultationMode) -> Self {
        mode.as_str().to_string()
    }
}

/// Sort key for the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Fee ascending.
    Fees,
    /// Experience descending.
    Experience,
}

impl SortKey {
    /// Parses a query value. Anything unrecognized leaves sorting off.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fees" => Some(SortKey::Fees),
            "experience" => Some(SortKey::Experience),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Fees => "fees",
            SortKey::Experience => "experience",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current filter and sort selection.
///
/// `specialties` behaves as a set: duplicates are ignored and the order only
/// affects how the selection is written back to the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub search: String,
    pub consultation: Option<ConsultationMode>,
    pub specialties: Vec<String>,
    pub sort: Option<SortKey>,
}

impl FilterState {
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn set_consultation(&mut self, mode: Option<ConsultationMode>) {
        self.consultation = mode;
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.sort = sort;
    }

    pub fn is_selected(&self, specialty: &str) -> bool {
        self.specialties.iter().any(|s| s == specialty)
    }

    /// Adds the specialty if absent. Returns `false` when it was already selected.
    pub fn select_specialty(&mut self, specialty: impl Into<String>) -> bool {
        let specialty = specialty.into();
        if specialty.is_empty() || self.is_selected(&specialty) {
            return false;
        }
        self.specialties.push(specialty);
        true
    }

    /// Checkbox behaviour: selects an unselected specialty, deselects a selected one.
    pub fn toggle_specialty(&mut self, specialty: &str) {
        if self.is_selected(specialty) {
            self.specialties.retain(|s| s != specialty);
        } else {
            self.select_specialty(specialty);
        }
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn clear_consultation(&mut self) {
        self.consultation = None;
    }

    pub fn clear_specialties(&mut self) {
        self.specialties.clear();
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// True when no dimension is active.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.consultation.is_none()
            && self.specialties.is_empty()
            && self.sort.is_none()
    }

    /// Returns a copy with `edit` applied. Used to build links for panel actions.
    pub fn with(&self, edit: impl FnOnce(&mut FilterState)) -> FilterState {
        let mut next = self.clone();
        edit(&mut next);
        next
    }
}
