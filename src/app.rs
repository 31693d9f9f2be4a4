//! HTTP router wiring.

use crate::directory::handlers::{
    handle_list_doctors, handle_specialties, handle_suggestions, DOCTORS_PATH, SPECIALTIES_PATH,
    SUGGESTIONS_PATH,
};
use crate::page::handlers::{handle_page, handle_placeholder, PAGE_PATH, PLACEHOLDER_PATH};
use crate::source::handlers::handle_health;
use crate::source::store::DoctorStore;
use axum::routing::get;
use axum::{Extension, Router};
use std::sync::Arc;

pub fn router(store: Arc<DoctorStore>) -> Router {
    Router::new()
        .route(PAGE_PATH, get(handle_page))
        .route(PLACEHOLDER_PATH, get(handle_placeholder))
        .route(DOCTORS_PATH, get(handle_list_doctors))
        .route(SUGGESTIONS_PATH, get(handle_suggestions))
        .route(SPECIALTIES_PATH, get(handle_specialties))
        .route("/health", get(handle_health))
        .layer(Extension(store))
}
