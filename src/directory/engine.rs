use super::extract::{experience_value, fee_value};
use crate::filters::types::{ConsultationMode, FilterState, SortKey};
use crate::source::types::Doctor;

/// Applies `filters` to `doctors`.
///
/// Stages run in a fixed order: name search, consultation mode, specialties, sort.
/// The result is always a subset of the input. Without a sort key it keeps the
/// input order; with one the sort is stable, so ties keep the input order too.
pub fn filter_doctors(doctors: &[Doctor], filters: &FilterState) -> Vec<Doctor> {
    let needle = filters.search.to_lowercase();

    let mut results: Vec<Doctor> = doctors
        .iter()
        .filter(|doctor| name_matches(&doctor.name, &needle))
        .filter(|doctor| offers_consultation(doctor, filters.consultation.as_ref()))
        .filter(|doctor| has_any_specialty(doctor, &filters.specialties))
        .cloned()
        .collect();

    if let Some(sort) = filters.sort {
        sort_doctors(&mut results, sort);
    }

    results
}

/// Case-insensitive substring match. `needle` must already be lowercase; empty matches all.
pub fn name_matches(name: &str, needle: &str) -> bool {
    needle.is_empty() || name.to_lowercase().contains(needle)
}

/// Unset mode keeps everyone; an unrecognized mode keeps no one.
pub fn offers_consultation(doctor: &Doctor, mode: Option<&ConsultationMode>) -> bool {
    match mode {
        None => true,
        Some(ConsultationMode::Video) => doctor.video_consult,
        Some(ConsultationMode::Clinic) => doctor.in_clinic,
        Some(ConsultationMode::Other(_)) => false,
    }
}

/// OR semantics: one shared specialty is enough. No selection keeps everyone.
pub fn has_any_specialty(doctor: &Doctor, selected: &[String]) -> bool {
    selected.is_empty()
        || doctor
            .specialty_names()
            .any(|name| selected.iter().any(|s| s == name))
}

pub fn sort_doctors(doctors: &mut [Doctor], sort: SortKey) {
    match sort {
        SortKey::Fees => doctors.sort_by(|a, b| {
            fee_value(a.fees.as_deref()).total_cmp(&fee_value(b.fees.as_deref()))
        }),
        SortKey::Experience => doctors.sort_by(|a, b| {
            experience_value(b.experience.as_deref())
                .cmp(&experience_value(a.experience.as_deref()))
        }),
    }
}
