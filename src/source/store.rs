use super::fetcher::FetchError;
use super::types::Doctor;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Lifecycle of the directory data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum LoadStatus {
    Loading,
    Loaded,
    /// Carries the user-visible error message.
    Failed(String),
}

impl LoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStatus::Loading => "loading",
            LoadStatus::Loaded => "loaded",
            LoadStatus::Failed(_) => "failed",
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A consistent view of the store at one point in time.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    pub status: LoadStatus,
    pub doctors: Arc<Vec<Doctor>>,
}

struct StoreState {
    status: LoadStatus,
    doctors: Arc<Vec<Doctor>>,
}

/// In-memory holder of the fetched directory.
///
/// Written once by the initial load, read by every request.
pub struct DoctorStore {
    state: RwLock<StoreState>,
}

impl DoctorStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: RwLock::new(StoreState {
                status: LoadStatus::Loading,
                doctors: Arc::new(Vec::new()),
            }),
        })
    }

    /// Builds an already-loaded store.
    pub fn with_doctors(doctors: Vec<Doctor>) -> Arc<Self> {
        Arc::new(Self {
            state: RwLock::new(StoreState {
                status: LoadStatus::Loaded,
                doctors: Arc::new(doctors),
            }),
        })
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.read().await;
        StoreSnapshot {
            status: state.status.clone(),
            doctors: state.doctors.clone(),
        }
    }

    /// Records the outcome of a fetch.
    ///
    /// Success replaces the list and clears any prior error. Failure stores the
    /// message and leaves the list empty.
    pub async fn apply(&self, result: Result<Vec<Doctor>, FetchError>) {
        let mut state = self.state.write().await;
        match result {
            Ok(doctors) => {
                state.status = LoadStatus::Loaded;
                state.doctors = Arc::new(doctors);
            }
            Err(err) => {
                state.status = LoadStatus::Failed(err.to_string());
                state.doctors = Arc::new(Vec::new());
            }
        }
    }
}
