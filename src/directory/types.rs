use super::engine::filter_doctors;
use super::specialties::specialty_options;
use super::suggest::suggestions;
use crate::filters::query::to_query;
use crate::filters::types::FilterState;
use crate::source::store::StoreSnapshot;
use crate::source::types::Doctor;
use serde::{Deserialize, Serialize};

/// Everything the directory page shows for one filter state.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryView {
    /// `loading`, `loaded` or `failed`.
    pub status: String,
    pub error: Option<String>,
    pub filters: FilterState,
    /// Canonical query string for `filters`.
    pub query: String,
    /// Size of the raw list.
    pub total_count: usize,
    /// Size of the filtered list.
    pub count: usize,
    pub doctors: Vec<Doctor>,
    pub suggestions: Vec<Doctor>,
    pub specialties: Vec<String>,
}

impl DirectoryView {
    pub fn build(snapshot: &StoreSnapshot, filters: FilterState) -> Self {
        let doctors = filter_doctors(&snapshot.doctors, &filters);
        let suggestions = suggestions(&snapshot.doctors, &filters.search);

        Self {
            status: snapshot.status.as_str().to_string(),
            error: snapshot.status.error().map(str::to_string),
            query: to_query(&filters),
            total_count: snapshot.doctors.len(),
            count: doctors.len(),
            doctors,
            suggestions,
            specialties: specialty_options(&snapshot.doctors),
            filters,
        }
    }

    /// A suggestion was just picked: the list stays closed until the search changes.
    pub fn close_suggestions(&mut self) {
        self.suggestions.clear();
    }
}

/// Trimmed-down entry for the autocomplete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub id: String,
    pub name: String,
    pub specialty: Option<String>,
    pub photo: String,
}

impl From<&Doctor> for SuggestionItem {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            specialty: doctor.primary_specialty().map(str::to_string),
            photo: doctor.photo.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub search: String,
    pub count: usize,
    pub suggestions: Vec<SuggestionItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SpecialtiesResponse {
    pub count: usize,
    pub specialties: Vec<String>,
}
