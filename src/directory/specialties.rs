use crate::source::types::Doctor;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Panel order for common specialties. Anything else follows, alphabetically.
pub const PREFERRED_ORDER: &[&str] = &[
    "General Physician",
    "Dentist",
    "Dermatologist",
    "Paediatrician",
    "Gynaecologist",
    "ENT",
    "Diabetologist",
    "Cardiologist",
    "Physiotherapist",
    "Endocrinologist",
    "Orthopaedic",
    "Ophthalmologist",
    "Gastroenterologist",
    "Pulmonologist",
    "Psychiatrist",
    "Urologist",
    "Dietitian/Nutritionist",
    "Psychologist",
    "Sexologist",
    "Nephrologist",
    "Neurologist",
    "Oncologist",
    "Ayurveda",
    "Homeopath",
];

/// Distinct specialty names across `doctors`, in panel order.
pub fn specialty_options(doctors: &[Doctor]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names: Vec<String> = doctors
        .iter()
        .flat_map(|doctor| doctor.specialty_names())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect();

    names.sort_by(|a, b| compare_specialties(a, b));
    names
}

pub fn compare_specialties(a: &str, b: &str) -> Ordering {
    match (preferred_rank(a), preferred_rank(b)) {
        (Some(ra), Some(rb)) => ra.cmp(&rb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)),
    }
}

fn preferred_rank(name: &str) -> Option<usize> {
    PREFERRED_ORDER.iter().position(|preferred| *preferred == name)
}
