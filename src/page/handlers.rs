use super::render::{render_page, PLACEHOLDER_SVG};
use crate::directory::types::DirectoryView;
use crate::filters::query::{is_selection, QueryPairs};
use crate::filters::sync::UrlSync;
use crate::source::store::DoctorStore;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Extension;
use std::sync::Arc;

pub const PAGE_PATH: &str = "/";
pub const PLACEHOLDER_PATH: &str = "/assets/doctor-placeholder.svg";

pub async fn handle_page(
    Query(pairs): Query<QueryPairs>,
    Extension(store): Extension<Arc<DoctorStore>>,
) -> Response {
    let mut sync = UrlSync::new(PAGE_PATH);
    let filters = sync.observe(&pairs);

    if let Some(target) = sync.write(&filters) {
        tracing::debug!("Replacing page URL with {}", target);
        return Redirect::to(&target).into_response();
    }

    let snapshot = store.snapshot().await;
    let mut view = DirectoryView::build(&snapshot, filters);

    // A picked suggestion closes the list
    let selection = is_selection(&pairs);
    if selection {
        view.close_suggestions();
    }

    match render_page(&view, selection) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render directory page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

pub async fn handle_placeholder() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], PLACEHOLDER_SVG)
}
