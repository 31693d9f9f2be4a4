use super::store::DoctorStore;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub doctors: usize,
    pub error: Option<String>,
}

pub async fn handle_health(Extension(store): Extension<Arc<DoctorStore>>) -> Json<HealthResponse> {
    let snapshot = store.snapshot().await;
    Json(HealthResponse {
        status: snapshot.status.as_str().to_string(),
        doctors: snapshot.doctors.len(),
        error: snapshot.status.error().map(str::to_string),
    })
}
