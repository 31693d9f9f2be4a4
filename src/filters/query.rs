//! Query-string codec for `FilterState`.
//!
//! Parameters: `search`, `consultation` (`video`|`clinic`), repeated `specialty`,
//! `sort` (`fees`|`experience`). Absent parameters leave the dimension inactive.
//! Decoding of the raw query is left to axum's `Query` extractor; this module works
//! on the decoded key/value pairs.

use super::types::{ConsultationMode, FilterState, SortKey};

pub const PARAM_SEARCH: &str = "search";
pub const PARAM_CONSULTATION: &str = "consultation";
pub const PARAM_SPECIALTY: &str = "specialty";
pub const PARAM_SORT: &str = "sort";
/// Transient marker on suggestion links: the search text was picked, not typed.
/// Never part of the canonical query.
pub const PARAM_SELECTED: &str = "selected";

/// Decoded query parameters in request order.
pub type QueryPairs = Vec<(String, String)>;

/// Builds a `FilterState` from decoded query pairs.
///
/// Single-valued parameters take their first occurrence. Unknown parameters are ignored.
pub fn from_pairs(pairs: &[(String, String)]) -> FilterState {
    let mut state = FilterState::default();
    let mut search_seen = false;
    let mut consultation_seen = false;
    let mut sort_seen = false;

    for (key, value) in pairs {
        match key.as_str() {
            PARAM_SEARCH if !search_seen => {
                search_seen = true;
                state.search = value.clone();
            }
            PARAM_CONSULTATION if !consultation_seen => {
                consultation_seen = true;
                state.consultation = ConsultationMode::parse(value);
            }
            PARAM_SPECIALTY => {
                state.select_specialty(value.as_str());
            }
            PARAM_SORT if !sort_seen => {
                sort_seen = true;
                state.sort = SortKey::parse(value);
            }
            _ => {}
        }
    }

    state
}

/// Canonical pairs for `state`: `search`, `consultation`, each `specialty`, `sort`.
/// Empty or unset fields are omitted.
pub fn to_pairs(state: &FilterState) -> QueryPairs {
    let mut pairs = QueryPairs::new();

    if !state.search.is_empty() {
        pairs.push((PARAM_SEARCH.to_string(), state.search.clone()));
    }
    if let Some(mode) = &state.consultation {
        pairs.push((PARAM_CONSULTATION.to_string(), mode.as_str().to_string()));
    }
    for specialty in &state.specialties {
        pairs.push((PARAM_SPECIALTY.to_string(), specialty.clone()));
    }
    if let Some(sort) = state.sort {
        pairs.push((PARAM_SORT.to_string(), sort.as_str().to_string()));
    }

    pairs
}

/// True when the request came from picking a suggestion.
pub fn is_selection(pairs: &[(String, String)]) -> bool {
    pairs.iter().any(|(key, _)| key == PARAM_SELECTED)
}

/// Canonical query string for `state`, without the leading `?`.
///
/// The default state encodes to `""`.
pub fn to_query(state: &FilterState) -> String {
    to_pairs(state)
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Link target for `state` on the page at `path`.
pub fn to_href(path: &str, state: &FilterState) -> String {
    let query = to_query(state);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Link target for picking the doctor named `name` from the suggestion list.
pub fn selection_href(path: &str, state: &FilterState, name: &str) -> String {
    let picked = state.with(|f| f.set_search(name));
    let href = to_href(path, &picked);
    let separator = if href.contains('?') { '&' } else { '?' };
    format!("{}{}{}=1", href, separator, PARAM_SELECTED)
}
