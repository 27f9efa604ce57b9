//! Contract tests for the report renderer.
//!
//! Payloads are built from JSON documents, the same way they arrive from
//! the service, so these tests cover the decode boundary and the section
//! presence rules together.

use quartier_client::RequestController;
use quartier_common::{AnalysisResult, ContractViolation};
use quartier_tui::report::{
    build_report, view_of, ReportView, Section, MAX_VISIBLE_STATIONS,
};
use serde_json::{json, Value};

/// A payload with every section populated.
fn full_payload() -> Value {
    json!({
        "geo_data": {
            "arrondissement": 18,
            "full_address": "3 Rue des Abbesses, 75018 Paris, France",
            "postcode": "75018",
            "neighborhood": "Montmartre"
        },
        "analysis": {
            "overview": {
                "description": "Village atmosphere on the hill.",
                "three_word_summary": "Artistic, Touristy, Steep"
            },
            "what_locals_say": [
                "Mornings are magic before the crowds arrive.",
                "Skip the funicular, take the stairs."
            ],
            "ratings": {
                "safety": {"score": 3, "justification": "Watch for pickpockets"},
                "nightlife": {"score": 4},
                "food_scene": {"score": 5}
            },
            "highlights": ["Sacré-Cœur at sunrise", "Vineyard of Clos Montmartre"],
            "recommendations": {
                "cafes": ["Le Consulat - historic artists' haunt"],
                "restaurants": ["Bouillon Pigalle - classics at bistro prices"],
                "activities": ["Place du Tertre portrait artists"]
            }
        },
        "transport": {
            "connectivity_score": 4,
            "landmark_travel_times": [
                {"landmark": "Sacré-Cœur", "time": "6 min walk"},
                {"landmark": "Louvre", "time": "22 min metro"}
            ],
            "nearby_stations": [
                {"name": "Abbesses", "transport_type": "Metro",
                 "lines": ["12"], "walk_time_minutes": 2},
                {"name": "Pigalle", "transport_type": "Metro",
                 "lines": ["2", "12"], "walk_time_minutes": 7}
            ],
            "has_late_night_service": true
        }
    })
}

fn result_from(value: Value) -> AnalysisResult {
    serde_json::from_value(value).unwrap()
}

fn section_titles(sections: &[Section]) -> Vec<&'static str> {
    sections.iter().map(Section::title).collect()
}

#[test]
fn full_payload_renders_every_section_once_in_order() {
    let report = build_report(&result_from(full_payload())).unwrap();

    assert_eq!(
        section_titles(&report.sections),
        vec![
            "Location",
            "Overview",
            "What Locals Say",
            "Ratings",
            "Highlights",
            "Recommendations",
            "Getting Around",
        ]
    );
}

#[test]
fn removing_one_optional_field_only_removes_its_own_section() {
    // (JSON pointer to remove, title of the section that must disappear)
    let cases = [
        ("/geo_data", "Location"),
        ("/analysis/overview", "Overview"),
        ("/analysis/what_locals_say", "What Locals Say"),
        ("/analysis/ratings", "Ratings"),
        ("/analysis/highlights", "Highlights"),
        ("/analysis/recommendations", "Recommendations"),
        ("/transport", "Getting Around"),
    ];

    let full_report = build_report(&result_from(full_payload())).unwrap();

    for (pointer, removed_title) in cases {
        let mut payload = full_payload();
        remove_pointer(&mut payload, pointer);

        let reduced_report = build_report(&result_from(payload)).unwrap();

        // The other sections survive with identical content, in order.
        let expected: Vec<&Section> = full_report
            .sections
            .iter()
            .filter(|section| section.title() != removed_title)
            .collect();
        let actual: Vec<&Section> = reduced_report.sections.iter().collect();

        assert_eq!(actual, expected, "removing {} must only drop {}", pointer, removed_title);
    }
}

fn remove_pointer(value: &mut Value, pointer: &str) {
    let (parent, key) = pointer.rsplit_once('/').unwrap();
    let parent = if parent.is_empty() {
        &mut *value
    } else {
        value.pointer_mut(parent).unwrap()
    };
    parent.as_object_mut().unwrap().remove(key);
}

#[test]
fn word_of_mouth_scalar_and_sequence_render_equivalently() {
    let scalar = result_from(json!({"analysis": {"what_locals_say": "Great area"}}));
    let sequence = result_from(json!({"analysis": {"what_locals_say": ["Great area"]}}));

    let scalar_report = build_report(&scalar).unwrap();
    let sequence_report = build_report(&sequence).unwrap();

    assert_eq!(scalar_report, sequence_report);
}

#[test]
fn multi_paragraph_word_of_mouth_preserves_order() {
    let result = result_from(json!({"analysis": {"what_locals_say": ["first", "second", "third"]}}));
    let report = build_report(&result).unwrap();

    match &report.sections[0] {
        Section::WordOfMouth(section) => {
            assert_eq!(section.paragraphs, vec!["first", "second", "third"]);
        }
        other => panic!("expected word-of-mouth, got {:?}", other),
    }
}

#[test]
fn boundary_scores_render_while_out_of_range_scores_are_violations() {
    for score in [1, 5] {
        let result = result_from(json!({"analysis": {"ratings": {"safety": {"score": score}}}}));
        let report = build_report(&result).unwrap();
        match &report.sections[0] {
            Section::Ratings(section) => {
                assert_eq!(section.entries[0].score, score);
                assert!(!section.entries[0].glyph.is_empty());
            }
            other => panic!("expected ratings, got {:?}", other),
        }
    }

    for score in [0, 6] {
        let result = result_from(json!({"analysis": {"ratings": {"safety": {"score": score}}}}));
        let err = build_report(&result).unwrap_err();
        assert_eq!(
            err,
            ContractViolation::RatingScoreOutOfRange {
                category: "safety".to_string(),
                score,
            }
        );
    }
}

#[test]
fn ratings_render_in_service_order() {
    let result = result_from(json!({"analysis": {"ratings": {
        "walkability": {"score": 5},
        "safety": {"score": 3},
        "quietness": {"score": 2}
    }}}));
    let report = build_report(&result).unwrap();

    match &report.sections[0] {
        Section::Ratings(section) => {
            let categories: Vec<&str> =
                section.entries.iter().map(|e| e.category.as_str()).collect();
            assert_eq!(categories, vec!["walkability", "safety", "quietness"]);
        }
        other => panic!("expected ratings, got {:?}", other),
    }
}

#[test]
fn empty_ratings_mapping_renders_no_section() {
    let result = result_from(json!({"analysis": {"ratings": {}}}));
    let report = build_report(&result).unwrap();
    assert!(report.sections.is_empty());
}

#[test]
fn stations_truncate_to_five_preserving_order() {
    let stations: Vec<Value> = (1..=8)
        .map(|i| json!({"name": format!("Station {}", i), "walk_time_minutes": i}))
        .collect();
    let result = result_from(json!({"transport": {"nearby_stations": stations}}));

    let report = build_report(&result).unwrap();
    match &report.sections[0] {
        Section::Transport(section) => {
            assert_eq!(section.stations.len(), MAX_VISIBLE_STATIONS);
            let names: Vec<&str> = section.stations.iter().map(|s| s.name.as_str()).collect();
            assert_eq!(
                names,
                vec!["Station 1", "Station 2", "Station 3", "Station 4", "Station 5"]
            );
        }
        other => panic!("expected transport, got {:?}", other),
    }
}

#[test]
fn arrondissement_emblem_only_for_one_through_twenty() {
    for (number, expect_emblem) in [(1, true), (20, true), (0, false), (21, false)] {
        let result = result_from(json!({"geo_data": {
            "arrondissement": number,
            "full_address": "somewhere in Paris"
        }}));
        let report = build_report(&result).unwrap();
        match &report.sections[0] {
            Section::Location(section) => {
                assert_eq!(
                    section.emblem.is_some(),
                    expect_emblem,
                    "arrondissement {}",
                    number
                );
            }
            other => panic!("expected location, got {:?}", other),
        }
    }
}

#[test]
fn rue_de_rivoli_end_to_end_scenario() {
    // The exact shape the service returns for the canonical demo address.
    let result = result_from(json!({
        "geo_data": {
            "arrondissement": 1,
            "full_address": "10 Rue de Rivoli, 75001 Paris, France"
        },
        "analysis": {
            "overview": {
                "description": "Central, elegant, and steps from the Louvre.",
                "three_word_summary": "historic chic central"
            },
            "ratings": {"safety": {"score": 4}}
        }
    }));

    let report = build_report(&result).unwrap();

    assert_eq!(
        section_titles(&report.sections),
        vec!["Location", "Overview", "Ratings"]
    );

    match &report.sections[0] {
        Section::Location(section) => {
            assert_eq!(section.arrondissement, Some(1));
            assert!(section.emblem.is_some());
        }
        other => panic!("expected location, got {:?}", other),
    }

    match &report.sections[2] {
        Section::Ratings(section) => {
            assert_eq!(section.entries.len(), 1);
            assert_eq!(section.entries[0].category, "safety");
        }
        other => panic!("expected ratings, got {:?}", other),
    }
}

#[test]
fn failure_scenario_shows_only_the_banner_then_resets_clean() {
    let mut controller = RequestController::new();
    controller.submit("10 Rue de Rivoli, 75001 Paris");

    // Timed out upstream: the transport layer normalized the message.
    controller.fail("Failed to analyze address: request timed out");

    match view_of(controller.state()).unwrap() {
        ReportView::Error { message } => {
            assert!(message.contains("Failed to analyze address"));
        }
        other => panic!("expected the error banner, got {:?}", other),
    }

    controller.reset();
    assert_eq!(view_of(controller.state()).unwrap(), ReportView::Idle);
}

#[test]
fn pending_state_shows_the_loading_view() {
    let mut controller = RequestController::new();
    controller.submit("10 Rue de Rivoli");

    match view_of(controller.state()).unwrap() {
        ReportView::Loading { address } => assert_eq!(address, "10 Rue de Rivoli"),
        other => panic!("expected loading, got {:?}", other),
    }
}

#[test]
fn succeeded_state_with_a_violating_payload_propagates_the_violation() {
    let mut controller = RequestController::new();
    controller.submit("10 Rue de Rivoli");

    let result = result_from(json!({"analysis": {"ratings": {"safety": {"score": 9}}}}));
    controller.complete(result);

    let err = view_of(controller.state()).unwrap_err();
    assert!(matches!(err, ContractViolation::RatingScoreOutOfRange { score: 9, .. }));
}

#[test]
fn hollow_transport_object_still_renders_its_section() {
    // `transport` present with everything inside missing: the section shows
    // up (the guard is on the parent), just with nothing in it.
    let result = result_from(json!({"transport": {}}));
    let report = build_report(&result).unwrap();

    match &report.sections[0] {
        Section::Transport(section) => {
            assert!(section.connectivity.is_none());
            assert!(section.landmarks.is_empty());
            assert!(section.stations.is_empty());
            assert!(section.late_night_service.is_none());
        }
        other => panic!("expected transport, got {:?}", other),
    }
}
