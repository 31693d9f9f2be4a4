//! Doctor Directory Library
//!
//! A searchable, filterable, sortable directory of doctors built from a remotely
//! fetched JSON list. The binary (`main.rs`) serves it as an HTML page and a JSON API.
//!
//! ## Architecture Modules
//! Control flow is linear: fetch -> store raw list -> derive views per request -> render.
//!
//! - **`source`**: The data source adapter. Downloads the list once at start-up and
//!   tracks its `Loading` / `Loaded` / `Failed` status.
//! - **`filters`**: The filter state (search, consultation mode, specialties, sort) and
//!   its two-way projection onto URL query parameters.
//! - **`directory`**: The derivation pipeline. Filtering, sorting, autocomplete
//!   suggestions, and specialty enumeration, all pure functions of raw data + filters.
//! - **`page`**: Server-rendered HTML for the directory and URL canonicalization.
//! - **`app`**: Router wiring shared by the binary and tests.
//! - **`config`**: Environment-driven runtime configuration.

pub mod app;
pub mod config;
pub mod directory;
pub mod filters;
pub mod page;
pub mod source;
