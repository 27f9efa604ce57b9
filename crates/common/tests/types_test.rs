//! Decode tests for the analysis payload model.
//!
//! The service populates the payload incrementally, so these tests lean on
//! partial documents: anything can be missing, and decoding must still
//! succeed.

use quartier_common::{AnalysisResult, CompareResult, ErrorBody, WordOfMouth};

#[test]
fn decodes_fully_populated_payload() {
    let json = r#"{
        "geo_data": {
            "arrondissement": 4,
            "full_address": "12 Rue des Archives, 75004 Paris, France",
            "latitude": 48.8575,
            "longitude": 2.3554,
            "postcode": "75004",
            "neighborhood": "Le Marais",
            "district": "Paris 4e Arrondissement"
        },
        "analysis": {
            "overview": {
                "description": "Historic heart of Paris with lively streets.",
                "three_word_summary": "Historic, Vibrant, Charming"
            },
            "what_locals_say": [
                "Lived here two years, never once bored.",
                "Noisy on weekends but worth it."
            ],
            "ratings": {
                "safety": {"score": 4, "justification": "Busy and well-lit"},
                "nightlife": {"score": 5},
                "quietness": {"score": 2, "justification": "Bar street nearby"}
            },
            "highlights": ["Village feel", "Gallery density"],
            "recommendations": {
                "cafes": ["Café Charlot - classic corner terrace"],
                "restaurants": ["Chez Janou - Provençal"],
                "activities": ["Place des Vosges picnic"]
            }
        },
        "transport": {
            "connectivity_score": 5,
            "landmark_travel_times": [
                {"landmark": "Louvre", "time": "14 min walk", "estimated_minutes": 14},
                {"landmark": "Eiffel Tower", "time": "25 min metro", "estimated_minutes": 25}
            ],
            "nearby_stations": [
                {"name": "Hôtel de Ville", "transport_type": "Metro",
                 "lines": ["1", "11"], "walk_time_minutes": 4, "distance_meters": 320}
            ],
            "has_late_night_service": true
        }
    }"#;

    let result: AnalysisResult = serde_json::from_str(json).unwrap();

    let geo = result.geo_data.unwrap();
    assert_eq!(geo.arrondissement, Some(4));
    assert_eq!(geo.neighborhood.as_deref(), Some("Le Marais"));

    let analysis = result.analysis.unwrap();
    assert_eq!(
        analysis.overview.unwrap().three_word_summary.as_deref(),
        Some("Historic, Vibrant, Charming")
    );

    let ratings = analysis.ratings.unwrap();
    assert_eq!(ratings["safety"].score, 4);
    assert_eq!(ratings["nightlife"].justification, None);

    let transport = result.transport.unwrap();
    assert_eq!(transport.connectivity_score, Some(5));
    assert_eq!(transport.has_late_night_service, Some(true));

    let stations = transport.nearby_stations.unwrap();
    assert_eq!(stations[0].lines.as_deref(), Some(&["1".to_string(), "11".to_string()][..]));
}

#[test]
fn decodes_empty_object() {
    let result: AnalysisResult = serde_json::from_str("{}").unwrap();
    assert!(result.geo_data.is_none());
    assert!(result.analysis.is_none());
    assert!(result.transport.is_none());
}

#[test]
fn parent_presence_does_not_require_children() {
    // Each top-level object present but hollow.
    let json = r#"{"geo_data": {}, "analysis": {}, "transport": {}}"#;
    let result: AnalysisResult = serde_json::from_str(json).unwrap();

    let geo = result.geo_data.unwrap();
    assert!(geo.arrondissement.is_none());
    assert!(geo.full_address.is_none());

    let analysis = result.analysis.unwrap();
    assert!(analysis.overview.is_none());
    assert!(analysis.ratings.is_none());

    let transport = result.transport.unwrap();
    assert!(transport.nearby_stations.is_none());
}

#[test]
fn word_of_mouth_accepts_both_shapes() {
    let single: AnalysisResult =
        serde_json::from_str(r#"{"analysis": {"what_locals_say": "Great area"}}"#).unwrap();
    let listed: AnalysisResult =
        serde_json::from_str(r#"{"analysis": {"what_locals_say": ["Great area"]}}"#).unwrap();

    let single_wom = single.analysis.unwrap().what_locals_say.unwrap();
    let listed_wom = listed.analysis.unwrap().what_locals_say.unwrap();

    assert!(matches!(single_wom, WordOfMouth::Single(_)));
    assert!(matches!(listed_wom, WordOfMouth::Paragraphs(_)));

    // Both normalize to the same visible text.
    assert_eq!(single_wom.paragraphs(), listed_wom.paragraphs());
}

#[test]
fn ratings_preserve_service_order() {
    let json = r#"{"analysis": {"ratings": {
        "walkability": {"score": 5},
        "safety": {"score": 3},
        "food_scene": {"score": 4}
    }}}"#;

    let result: AnalysisResult = serde_json::from_str(json).unwrap();
    let ratings = result.analysis.unwrap().ratings.unwrap();

    let keys: Vec<&str> = ratings.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["walkability", "safety", "food_scene"]);
}

#[test]
fn unknown_fields_are_ignored() {
    let json = r#"{
        "geo_data": {"arrondissement": 7, "importance": 0.81, "osm_id": 12345},
        "schema_version": 3
    }"#;

    let result: AnalysisResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.geo_data.unwrap().arrondissement, Some(7));
}

#[test]
fn out_of_range_arrondissement_still_decodes() {
    // Range enforcement belongs to the display layer; decoding keeps the raw value.
    let json = r#"{"geo_data": {"arrondissement": 42}}"#;
    let result: AnalysisResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.geo_data.unwrap().arrondissement, Some(42));
}

#[test]
fn ratings_not_a_mapping_is_a_decode_error() {
    let json = r#"{"analysis": {"ratings": ["safety", "nightlife"]}}"#;
    assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
}

#[test]
fn decodes_compare_result() {
    let json = r#"{
        "better_for": {
            "families": "address2 - calmer streets and parks",
            "nightlife": "address1 - bar density"
        },
        "overall_recommendation": "Address 1 for short stays, address 2 to settle down."
    }"#;

    let result: CompareResult = serde_json::from_str(json).unwrap();
    let better = result.better_for.unwrap();
    let keys: Vec<&str> = better.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["families", "nightlife"]);
    assert!(result.overall_recommendation.unwrap().contains("Address 1"));
}

#[test]
fn decodes_error_body() {
    let body: ErrorBody = serde_json::from_str(r#"{"error": "Address is required"}"#).unwrap();
    assert_eq!(body.error, "Address is required");
}
