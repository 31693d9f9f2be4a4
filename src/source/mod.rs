//! Data Source Module
//!
//! Acquires the doctor list from the remote JSON resource and holds it in memory.
//!
//! ## Workflow
//! 1. **Download**: A single GET against the configured resource URL, issued once at start-up.
//! 2. **Decode**: The body is parsed into `Doctor` records. A body that is not an array
//!    yields an empty list; malformed elements are skipped.
//! 3. **Storage**: The outcome is applied to the shared `DoctorStore`, which tracks the
//!    `Loading` / `Loaded` / `Failed` status read by the page and the API.

pub mod fetcher;
pub mod handlers;
pub mod store;
pub mod types;
