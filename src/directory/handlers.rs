use super::specialties::specialty_options;
use super::suggest::suggestions;
use super::types::{DirectoryView, SpecialtiesResponse, SuggestionItem, SuggestionsResponse};
use crate::filters::query::{from_pairs, QueryPairs};
use crate::source::store::DoctorStore;
use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

pub const DOCTORS_PATH: &str = "/api/doctors";
pub const SUGGESTIONS_PATH: &str = "/api/suggestions";
pub const SPECIALTIES_PATH: &str = "/api/specialties";

pub async fn handle_list_doctors(
    Query(pairs): Query<QueryPairs>,
    Extension(store): Extension<Arc<DoctorStore>>,
) -> Json<DirectoryView> {
    let filters = from_pairs(&pairs);
    let snapshot = store.snapshot().await;
    let view = DirectoryView::build(&snapshot, filters);

    tracing::debug!(
        "Directory query '{}' matched {} of {} doctors",
        view.query,
        view.count,
        view.total_count
    );

    Json(view)
}

pub async fn handle_suggestions(
    Query(pairs): Query<QueryPairs>,
    Extension(store): Extension<Arc<DoctorStore>>,
) -> Json<SuggestionsResponse> {
    let search = from_pairs(&pairs).search;
    let snapshot = store.snapshot().await;

    let suggestions: Vec<SuggestionItem> = suggestions(&snapshot.doctors, &search)
        .iter()
        .map(SuggestionItem::from)
        .collect();

    Json(SuggestionsResponse {
        search,
        count: suggestions.len(),
        suggestions,
    })
}

pub async fn handle_specialties(
    Extension(store): Extension<Arc<DoctorStore>>,
) -> Json<SpecialtiesResponse> {
    let snapshot = store.snapshot().await;
    let specialties = specialty_options(&snapshot.doctors);

    Json(SpecialtiesResponse {
        count: specialties.len(),
        specialties,
    })
}
