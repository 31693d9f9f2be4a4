//! Directory Module
//!
//! Derives everything the directory shows from the raw doctor list and the filter state.
//!
//! ## Overview
//! The raw list is fetched once; every view is recomputed from it on demand. All
//! derivations here are pure functions: they never mutate the records and never fail.
//!
//! ## Responsibilities
//! - **Filtering**: Name search, consultation mode, and specialty filters, applied in that order.
//! - **Sorting**: Stable fee-ascending or experience-descending ordering.
//! - **Suggestions**: Up to five name matches for the search box.
//! - **Specialties**: The ordered option list for the filter panel.
//! - **API**: JSON endpoints exposing the derived views.
//!
//! ## Submodules
//! - **`engine`**: The filter/sort pipeline.
//! - **`extract`**: Numeric extraction from free-form fee and experience text.
//! - **`suggest`**: Autocomplete suggestions and the search box model.
//! - **`specialties`**: Specialty enumeration and preferred ordering.
//! - **`types`**: The `DirectoryView` snapshot and API DTOs.
//! - **`handlers`**: HTTP request handlers for the Axum web server.

pub mod engine;
pub mod extract;
pub mod handlers;
pub mod specialties;
pub mod suggest;
pub mod types;

#[cfg(test)]
mod tests;
