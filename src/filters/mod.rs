//! Filter State Module
//!
//! The single authority for what the directory is showing, and its projection onto the URL.
//!
//! ## Overview
//! `FilterState` carries four independent dimensions: search text, consultation mode,
//! selected specialties, and sort key. Any combination is valid.
//!
//! The URL is never a second source of truth. It is read once when a page is opened
//! (or when the URL changes externally) and written whenever the state changes, with
//! the write suppressed when the query string already matches.
//!
//! ## Submodules
//! - **`types`**: The filter state and its enumerations.
//! - **`query`**: Query-string parsing and canonical encoding.
//! - **`sync`**: `UrlSync`, the guarded state-to-URL writer.

pub mod query;
pub mod sync;
pub mod types;
