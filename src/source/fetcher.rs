use super::store::DoctorStore;
use super::types::Doctor;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;

/// Failure of the one-shot directory download.
///
/// The `Display` text is what the page shows in its error banner.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to reach the doctor directory: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Doctor directory responded with HTTP {0}")]
    Status(u16),

    #[error("Doctor directory returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Issues the initial load in the background and applies the outcome to `store`.
///
/// Runs exactly once; there is no retry and no timeout beyond the client defaults.
/// The page keeps serving (in `Loading` state) while the request is in flight.
pub fn spawn_initial_load(
    store: Arc<DoctorStore>,
    client: reqwest::Client,
    url: String,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!("Fetching doctor directory from {}", url);
        let result = fetch_doctors(&client, &url).await;
        match &result {
            Ok(doctors) => tracing::info!("Loaded {} doctors", doctors.len()),
            Err(err) => tracing::error!("Failed to load doctor directory: {}", err),
        }
        store.apply(result).await;
    })
}

pub async fn fetch_doctors(client: &reqwest::Client, url: &str) -> Result<Vec<Doctor>, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    Ok(decode_doctors(&body)?)
}

/// Parses a directory body.
///
/// Valid JSON that is not an array yields an empty list. Array elements that are not
/// objects are skipped; the remaining records keep their order. Wrongly typed fields
/// inside an object degrade to defaults rather than dropping the record.
pub fn decode_doctors(body: &str) -> Result<Vec<Doctor>, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    let serde_json::Value::Array(items) = value else {
        tracing::warn!("Directory payload is not an array, treating as empty");
        return Ok(Vec::new());
    };

    let doctors = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value::<Doctor>(item) {
            Ok(doctor) => Some(doctor),
            Err(err) => {
                tracing::warn!("Skipping malformed doctor record at index {}: {}", idx, err);
                None
            }
        })
        .collect();

    Ok(doctors)
}
