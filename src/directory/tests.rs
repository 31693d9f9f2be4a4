//! Directory Module Tests
//!
//! Validates the derivation pipeline and the views built on top of it.
//!
//! ## Test Scopes
//! - **Extraction**: Fee and experience parsing from free-form text.
//! - **Filtering**: Name search, consultation mode, specialty OR semantics, subset invariants.
//! - **Sorting**: Stable fee-ascending and experience-descending ordering.
//! - **Suggestions**: Cap, ordering, and the search box model.
//! - **Specialties**: Preferred ordering with alphabetical fallback.
//! - **Handlers**: JSON endpoints over a loaded store.

#[cfg(test)]
mod tests {
    use crate::directory::engine::filter_doctors;
    use crate::directory::extract::{experience_value, fee_value, parse_experience, parse_fee};
    use crate::directory::handlers::{handle_list_doctors, handle_specialties, handle_suggestions};
    use crate::directory::specialties::specialty_options;
    use crate::directory::suggest::{suggestions, SearchBox, MAX_SUGGESTIONS};
    use crate::directory::types::DirectoryView;
    use crate::filters::types::{ConsultationMode, FilterState, SortKey};
    use crate::source::store::{DoctorStore, LoadStatus, StoreSnapshot};
    use crate::source::types::{Doctor, Specialty};
    use axum::extract::Query;
    use axum::Extension;
    use std::sync::Arc;

    fn doctor(id: &str, name: &str, specialties: &[&str], video: bool, clinic: bool) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: name.to_string(),
            specialities: specialties.iter().map(|s| Specialty::new(*s)).collect(),
            video_consult: video,
            in_clinic: clinic,
            ..Default::default()
        }
    }

    fn with_fee(mut d: Doctor, fee: &str) -> Doctor {
        d.fees = Some(fee.to_string());
        d
    }

    fn with_experience(mut d: Doctor, experience: &str) -> Doctor {
        d.experience = Some(experience.to_string());
        d
    }

    fn sample() -> Vec<Doctor> {
        vec![
            doctor("1", "Dr. Anita Sharma", &["Dentist"], true, false),
            doctor("2", "Dr. Karan Mehta", &["ENT", "Dentist"], false, true),
            doctor("3", "Dr. Ravi Kumar", &["Cardiologist"], true, true),
            doctor("4", "Dr. Meera Iyer", &["Dermatologist"], false, false),
        ]
    }

    fn ids(doctors: &[Doctor]) -> Vec<&str> {
        doctors.iter().map(|d| d.id.as_str()).collect()
    }

    fn filters(edit: impl FnOnce(&mut FilterState)) -> FilterState {
        FilterState::default().with(edit)
    }

    // ============================================================
    // EXTRACTION TESTS
    // ============================================================

    #[test]
    fn test_parse_fee_currency_text() {
        assert_eq!(parse_fee("₹ 500"), 500.0);
        // The dot in "Rs." survives stripping
        assert_eq!(parse_fee("Rs. 1,200"), 0.12);
        assert_eq!(parse_fee("₹ 1,200"), 1200.0);
        assert_eq!(parse_fee("₹ 450.50"), 450.5);
    }

    #[test]
    fn test_parse_fee_unparseable_is_zero() {
        assert_eq!(parse_fee("abc"), 0.0);
        assert_eq!(parse_fee(""), 0.0);
        assert_eq!(parse_fee("."), 0.0);
        assert_eq!(fee_value(None), 0.0);
    }

    #[test]
    fn test_parse_fee_takes_leading_number() {
        assert_eq!(parse_fee("1.2.3"), 1.2);
    }

    #[test]
    fn test_parse_experience() {
        assert_eq!(parse_experience("13 Years of experience"), 13);
        assert_eq!(parse_experience("  5 yrs"), 5);
        assert_eq!(parse_experience("+7 years"), 7);
        assert_eq!(parse_experience("Experience: 9 years"), 0);
        assert_eq!(parse_experience("-3 years"), 0);
        assert_eq!(parse_experience(""), 0);
        assert_eq!(experience_value(None), 0);
    }

    // ============================================================
    // FILTERING TESTS
    // ============================================================

    #[test]
    fn test_no_filters_keeps_source_order() {
        let doctors = sample();
        let result = filter_doctors(&doctors, &FilterState::default());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let doctors = vec![
            doctor("1", "Anita", &[], false, false),
            doctor("2", "Karan", &[], false, false),
            doctor("3", "Ravi", &[], false, false),
        ];

        let result = filter_doctors(&doctors, &filters(|f| f.set_search("an")));
        assert_eq!(ids(&result), vec!["1", "2"]);

        let result = filter_doctors(&doctors, &filters(|f| f.set_search("KARAN")));
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn test_video_mode_keeps_exactly_video_doctors() {
        let doctors = sample();
        let result = filter_doctors(
            &doctors,
            &filters(|f| f.set_consultation(Some(ConsultationMode::Video))),
        );

        assert_eq!(ids(&result), vec!["1", "3"]);
        assert!(result.iter().all(|d| d.video_consult));
    }

    #[test]
    fn test_clinic_mode() {
        let doctors = sample();
        let result = filter_doctors(
            &doctors,
            &filters(|f| f.set_consultation(Some(ConsultationMode::Clinic))),
        );
        assert_eq!(ids(&result), vec!["2", "3"]);
    }

    #[test]
    fn test_unrecognized_mode_matches_nothing() {
        let doctors = sample();
        let result = filter_doctors(
            &doctors,
            &filters(|f| f.set_consultation(Some(ConsultationMode::Other("home".into())))),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_two_specialties_is_union() {
        let doctors = sample();
        let result = filter_doctors(
            &doctors,
            &filters(|f| {
                f.select_specialty("ENT");
                f.select_specialty("Cardiologist");
            }),
        );
        assert_eq!(ids(&result), vec!["2", "3"]);
    }

    #[test]
    fn test_filters_compose() {
        let doctors = sample();
        let result = filter_doctors(
            &doctors,
            &filters(|f| {
                f.set_search("dr.");
                f.set_consultation(Some(ConsultationMode::Video));
                f.select_specialty("Dentist");
            }),
        );
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_filtered_is_subset_and_idempotent() {
        let doctors = sample();
        let combos = vec![
            FilterState::default(),
            filters(|f| f.set_search("a")),
            filters(|f| f.set_consultation(Some(ConsultationMode::Clinic))),
            filters(|f| {
                f.select_specialty("Dentist");
                f.set_sort(Some(SortKey::Fees));
            }),
            filters(|f| {
                f.set_search("r");
                f.set_consultation(Some(ConsultationMode::Video));
                f.set_sort(Some(SortKey::Experience));
            }),
        ];

        for state in combos {
            let once = filter_doctors(&doctors, &state);
            assert!(once.iter().all(|d| doctors.contains(d)));

            let twice = filter_doctors(&once, &state);
            assert_eq!(once, twice, "re-applying {:?} changed the result", state);
        }
    }

    // ============================================================
    // SORTING TESTS
    // ============================================================

    #[test]
    fn test_fee_sort_ascending_with_unparseable_first() {
        let doctors = vec![
            with_fee(doctor("a", "A", &[], false, false), "₹ 500"),
            with_fee(doctor("b", "B", &[], false, false), "₹ 100"),
            with_fee(doctor("c", "C", &[], false, false), "abc"),
        ];

        let result = filter_doctors(&doctors, &filters(|f| f.set_sort(Some(SortKey::Fees))));
        let fees: Vec<&str> = result.iter().filter_map(|d| d.fees.as_deref()).collect();
        assert_eq!(fees, vec!["abc", "₹ 100", "₹ 500"]);
    }

    #[test]
    fn test_experience_sort_descending() {
        let doctors = vec![
            with_experience(doctor("a", "A", &[], false, false), "5 Years of experience"),
            with_experience(doctor("b", "B", &[], false, false), "13 Years of experience"),
        ];

        let result =
            filter_doctors(&doctors, &filters(|f| f.set_sort(Some(SortKey::Experience))));
        assert_eq!(ids(&result), vec!["b", "a"]);
    }

    #[test]
    fn test_sort_is_stable_and_missing_values_are_zero() {
        let doctors = vec![
            doctor("none-1", "A", &[], false, false),
            with_fee(doctor("cheap", "B", &[], false, false), "₹ 200"),
            doctor("none-2", "C", &[], false, false),
            with_fee(doctor("free", "D", &[], false, false), "free"),
        ];

        let result = filter_doctors(&doctors, &filters(|f| f.set_sort(Some(SortKey::Fees))));
        assert_eq!(ids(&result), vec!["none-1", "none-2", "free", "cheap"]);
    }

    // ============================================================
    // SUGGESTION TESTS
    // ============================================================

    #[test]
    fn test_suggestions_empty_search() {
        assert!(suggestions(&sample(), "").is_empty());
        assert!(suggestions(&[], "an").is_empty());
    }

    #[test]
    fn test_suggestions_capped_in_list_order() {
        let doctors: Vec<Doctor> = (0..8)
            .map(|i| doctor(&i.to_string(), &format!("Dr. Shah {}", i), &[], false, false))
            .collect();

        let result = suggestions(&doctors, "shah");
        assert_eq!(result.len(), MAX_SUGGESTIONS);
        assert_eq!(ids(&result), vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_suggestions_ignore_other_filters() {
        // Suggestions only look at the name, even for doctors other filters would hide
        let result = suggestions(&sample(), "meera");
        assert_eq!(ids(&result), vec!["4"]);
    }

    #[test]
    fn test_search_box_select_clears_suggestions() {
        let doctors = sample();
        let mut search = SearchBox::default();

        search.input("ra", &doctors);
        assert_eq!(ids(search.suggestions()), vec!["2", "3", "4"]);

        let picked = search.suggestions()[1].clone();
        search.select(&picked);
        assert_eq!(search.text(), "Dr. Ravi Kumar");
        assert!(search.suggestions().is_empty());

        search.input("", &doctors);
        assert!(search.suggestions().is_empty());
    }

    #[test]
    fn test_search_box_refresh_on_data_arrival() {
        let mut search = SearchBox::default();
        search.input("anita", &[]);
        assert!(search.suggestions().is_empty());

        search.refresh(&sample());
        assert_eq!(ids(search.suggestions()), vec!["1"]);
    }

    #[test]
    fn test_suggestions_keep_every_prefix_match() {
        let doctors = vec![
            doctor("1", "Dr. Anita", &[], false, false),
            doctor("2", "Dr. Anita Sharma", &[], false, false),
        ];

        // An exact name match does not hide the longer names
        assert_eq!(ids(&suggestions(&doctors, "dr. anita")), vec!["1", "2"]);
    }

    #[test]
    fn test_directory_view_close_suggestions() {
        let snapshot = StoreSnapshot {
            status: LoadStatus::Loaded,
            doctors: Arc::new(sample()),
        };
        let mut view = DirectoryView::build(&snapshot, filters(|f| f.set_search("Dr. Ravi Kumar")));
        assert_eq!(ids(&view.suggestions), vec!["3"]);

        view.close_suggestions();
        assert!(view.suggestions.is_empty());
        assert_eq!(ids(&view.doctors), vec!["3"]);
    }

    // ============================================================
    // SPECIALTY TESTS
    // ============================================================

    #[test]
    fn test_specialty_options_preferred_then_alphabetical() {
        let doctors = vec![
            doctor("1", "A", &["Yoga Therapist", "Dentist"], false, false),
            doctor("2", "B", &["General Physician", "acupuncture"], false, false),
            doctor("3", "C", &["Dentist", "Ayurveda", "Bariatric Surgeon"], false, false),
        ];

        assert_eq!(
            specialty_options(&doctors),
            vec![
                "General Physician",
                "Dentist",
                "Ayurveda",
                "acupuncture",
                "Bariatric Surgeon",
                "Yoga Therapist",
            ]
        );
    }

    #[test]
    fn test_specialty_options_skip_blank_and_duplicates() {
        let doctors = vec![
            doctor("1", "A", &["ENT", ""], false, false),
            doctor("2", "B", &["ENT"], false, false),
        ];
        assert_eq!(specialty_options(&doctors), vec!["ENT"]);
    }

    // ============================================================
    // VIEW & HANDLER TESTS
    // ============================================================

    #[test]
    fn test_directory_view_while_loading() {
        let snapshot = StoreSnapshot {
            status: LoadStatus::Loading,
            doctors: Arc::new(Vec::new()),
        };
        let view = DirectoryView::build(&snapshot, filters(|f| f.set_search("an")));

        assert_eq!(view.status, "loading");
        assert!(view.doctors.is_empty());
        assert!(view.suggestions.is_empty());
        assert!(view.specialties.is_empty());
        assert_eq!(view.query, "search=an");
    }

    #[test]
    fn test_directory_view_failed_store() {
        let snapshot = StoreSnapshot {
            status: LoadStatus::Failed("Doctor directory responded with HTTP 500".into()),
            doctors: Arc::new(Vec::new()),
        };
        let view = DirectoryView::build(&snapshot, FilterState::default());

        assert_eq!(view.status, "failed");
        assert_eq!(
            view.error.as_deref(),
            Some("Doctor directory responded with HTTP 500")
        );
        assert_eq!(view.count, 0);
    }

    #[tokio::test]
    async fn test_handle_list_doctors() {
        let store = DoctorStore::with_doctors(sample());
        let response = handle_list_doctors(
            Query(vec![
                ("consultation".to_string(), "video".to_string()),
                ("sort".to_string(), "fees".to_string()),
            ]),
            Extension(store),
        )
        .await;

        assert_eq!(response.0.status, "loaded");
        assert_eq!(response.0.total_count, 4);
        assert_eq!(response.0.count, 2);
        assert_eq!(response.0.filters.sort, Some(SortKey::Fees));
    }

    #[tokio::test]
    async fn test_handle_suggestions() {
        let store = DoctorStore::with_doctors(sample());
        let response =
            handle_suggestions(
            Query(vec![("search".to_string(), "an".to_string())]),
            Extension(store.clone()),
        )
                .await;

        assert_eq!(response.0.search, "an");
        assert_eq!(response.0.count, 2);
        assert_eq!(response.0.suggestions[0].name, "Dr. Anita Sharma");
        assert_eq!(response.0.suggestions[0].specialty.as_deref(), Some("Dentist"));

        let response = handle_suggestions(Query(Vec::new()), Extension(store)).await;
        assert_eq!(response.0.count, 0);
    }

    #[tokio::test]
    async fn test_handle_specialties() {
        let store = DoctorStore::with_doctors(sample());
        let response = handle_specialties(Extension(store)).await;

        assert_eq!(
            response.0.specialties,
            vec!["Dentist", "Dermatologist", "ENT", "Cardiologist"]
        );
        assert_eq!(response.0.count, 4);
    }
}
