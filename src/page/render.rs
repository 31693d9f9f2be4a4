//! HTML rendering for the directory page.
//!
//! Markup lives in the `templates/` files and is rendered with minijinja with HTML
//! auto-escaping on. Everything that needs logic (hrefs, fallbacks, checked state) is
//! computed here into a [`PageContext`], so the templates only place values.

use super::handlers::{PAGE_PATH, PLACEHOLDER_PATH};
use crate::directory::handlers::SUGGESTIONS_PATH;
use crate::directory::types::DirectoryView;
use crate::filters::query::{selection_href, to_href};
use crate::filters::types::{ConsultationMode, FilterState, SortKey};
use crate::source::types::Doctor;
use minijinja::{AutoEscape, Environment, Error};
use serde::Serialize;

pub const PAGE_TEMPLATE: &str = include_str!("templates/page.html");
pub const CARD_TEMPLATE: &str = include_str!("templates/card.html");

const NOT_AVAILABLE: &str = "N/A";

pub const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="120" viewBox="0 0 120 120"><rect width="120" height="120" fill="#e2e8f0"/><circle cx="60" cy="46" r="22" fill="#94a3b8"/><path d="M20 112c6-24 22-36 40-36s34 12 40 36z" fill="#94a3b8"/></svg>"##;

/// Everything the page template shows, with links already built.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    pub page_path: &'static str,
    pub suggestions_endpoint: &'static str,
    pub placeholder: &'static str,
    pub status: String,
    pub error: Option<String>,
    pub count: usize,
    pub total_count: usize,
    pub search: String,
    pub suggestions: Vec<SuggestionLink>,
    pub consultation_options: Vec<FilterOption>,
    pub consultation_clear_href: String,
    pub specialty_options: Vec<FilterOption>,
    pub specialties_clear_href: String,
    pub sort_options: Vec<FilterOption>,
    pub sort_clear_href: String,
    pub doctors: Vec<CardContext>,
    /// Set when the request came from a suggestion pick; the page then swaps the
    /// address bar to `canonical_href` without a new history entry.
    pub selection: bool,
    pub canonical_href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionLink {
    pub name: String,
    pub href: String,
}

/// One radio or checkbox in the sidebar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    pub testid: String,
    pub checked: bool,
}

/// Display values for one doctor card. Missing values are already `N/A`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardContext {
    pub name: String,
    pub photo: String,
    pub specialty: String,
    pub experience: String,
    pub fee: String,
    pub video_consult: bool,
    pub in_clinic: bool,
}

impl PageContext {
    pub fn build(view: &DirectoryView, selection: bool) -> Self {
        let filters = &view.filters;

        let consultation_options = [
            (ConsultationMode::Video, "Video Consult", "filter-video-consult"),
            (ConsultationMode::Clinic, "In Clinic", "filter-in-clinic"),
        ]
        .into_iter()
        .map(|(mode, label, testid)| FilterOption {
            checked: filters.consultation.as_ref() == Some(&mode),
            value: mode.as_str().to_string(),
            label: label.to_string(),
            testid: testid.to_string(),
        })
        .collect();

        let specialty_options = view
            .specialties
            .iter()
            .map(|specialty| FilterOption {
                value: specialty.clone(),
                label: specialty.clone(),
                testid: format!("filter-specialty-{}", testid_fragment(specialty)),
                checked: filters.is_selected(specialty),
            })
            .collect();

        let sort_options = [
            (SortKey::Fees, "Fees: Low to High", "filter-sort-fees"),
            (SortKey::Experience, "Experience: Most Experience first", "filter-sort-experience"),
        ]
        .into_iter()
        .map(|(sort, label, testid)| FilterOption {
            checked: filters.sort == Some(sort),
            value: sort.as_str().to_string(),
            label: label.to_string(),
            testid: testid.to_string(),
        })
        .collect();

        Self {
            page_path: PAGE_PATH,
            suggestions_endpoint: SUGGESTIONS_PATH,
            placeholder: PLACEHOLDER_PATH,
            status: view.status.clone(),
            error: view.error.clone(),
            count: view.count,
            total_count: view.total_count,
            search: filters.search.clone(),
            suggestions: view
                .suggestions
                .iter()
                .map(|doctor| SuggestionLink {
                    name: doctor.name.clone(),
                    href: selection_href(PAGE_PATH, filters, &doctor.name),
                })
                .collect(),
            consultation_options,
            consultation_clear_href: to_href(
                PAGE_PATH,
                &filters.with(FilterState::clear_consultation),
            ),
            specialty_options,
            specialties_clear_href: to_href(
                PAGE_PATH,
                &filters.with(FilterState::clear_specialties),
            ),
            sort_options,
            sort_clear_href: to_href(PAGE_PATH, &filters.with(FilterState::clear_sort)),
            doctors: view.doctors.iter().map(CardContext::from_doctor).collect(),
            selection,
            canonical_href: to_href(PAGE_PATH, filters),
        }
    }
}

impl CardContext {
    pub fn from_doctor(doctor: &Doctor) -> Self {
        let photo = if doctor.photo.trim().is_empty() {
            PLACEHOLDER_PATH
        } else {
            doctor.photo.as_str()
        };

        Self {
            name: doctor.name.clone(),
            photo: photo.to_string(),
            specialty: doctor.primary_specialty().unwrap_or(NOT_AVAILABLE).to_string(),
            experience: display_or_na(doctor.experience.as_deref()).to_string(),
            fee: display_or_na(doctor.fees.as_deref()).to_string(),
            video_consult: doctor.video_consult,
            in_clinic: doctor.in_clinic,
        }
    }
}

/// Renders the full page for `view`. `selection` marks a request that came from
/// picking a suggestion.
pub fn render_page(view: &DirectoryView, selection: bool) -> Result<String, Error> {
    let env = environment()?;
    let context = PageContext::build(view, selection);
    env.get_template("page.html")?.render(&context)
}

fn environment() -> Result<Environment<'static>, Error> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_template("page.html", PAGE_TEMPLATE)?;
    env.add_template("card.html", CARD_TEMPLATE)?;
    Ok(env)
}

fn display_or_na(value: Option<&str>) -> &str {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(NOT_AVAILABLE)
}

/// `General Physician` -> `General-Physician`, `Dietitian/Nutritionist` -> `Dietitian-Nutritionist`.
fn testid_fragment(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_whitespace() || c == '/' { '-' } else { c })
        .collect()
}
