//! Directory Page Module
//!
//! Serves the human-facing directory: a search box with live suggestions, a filter
//! sidebar, and a grid of doctor cards.
//!
//! ## URL synchronization
//! The page URL is a projection of the filter state. Every request parses the query
//! into a `FilterState`; if the query is not the canonical encoding of that state the
//! handler redirects to the canonical URL, otherwise it renders. The canonical query of
//! a canonical query is itself, so the redirect never loops. A `selected=1` pair from a
//! suggestion link is outside that projection; it only closes the suggestion list.
//!
//! ## Submodules
//! - **`render`**: `PageContext` and the minijinja templates in `templates/`.
//! - **`handlers`**: The page and placeholder-image handlers.

pub mod handlers;
pub mod render;
