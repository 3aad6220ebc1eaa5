//! Receipt serialization contract tests.

use textlens_types::{
    AnalysisReceipt, AnalysisReport, AnalyzeArgsMeta, Alternative, EntityFilter, EntityKind,
    EntityRecord, LemmaAlternatives, SCHEMA_VERSION, ToolInfo,
};

fn sample_args() -> AnalyzeArgsMeta {
    AnalyzeArgsMeta {
        detect_language: true,
        sentiment_analysis: false,
        lemmatize: true,
        alternatives: true,
        people: false,
        places: true,
        organizations: false,
        maximum_alternatives: 10,
        default_language: "en".to_string(),
    }
}

#[test]
fn receipt_serializes_with_schema_version() {
    let receipt = AnalysisReceipt {
        schema_version: SCHEMA_VERSION,
        generated_at_ms: 1_700_000_000_000,
        tool: ToolInfo::current(),
        args: sample_args(),
        report: AnalysisReport::default(),
    };

    let json = serde_json::to_string(&receipt).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["schema_version"], SCHEMA_VERSION);
    assert_eq!(value["tool"]["name"], "textlens");
    assert_eq!(value["args"]["maximum_alternatives"], 10);
}

#[test]
fn disabled_sections_are_omitted_from_json() {
    let report = AnalysisReport {
        language: Some("en".to_string()),
        ..Default::default()
    };
    let value = serde_json::to_value(&report).unwrap();
    let obj = value.as_object().unwrap();

    assert_eq!(obj.get("language").and_then(|v| v.as_str()), Some("en"));
    assert!(!obj.contains_key("sentiment"));
    assert!(!obj.contains_key("lemmas"));
    assert!(!obj.contains_key("entities"));
}

#[test]
fn enabled_empty_sections_survive_roundtrip() {
    let report = AnalysisReport {
        lemmas: Some(vec![]),
        entities: Some(vec![EntityRecord {
            kind: EntityKind::Place,
            text: "Paris".to_string(),
        }]),
        alternatives: Some(vec![LemmaAlternatives {
            lemma: "run".to_string(),
            neighbors: vec![Alternative {
                word: "sprint".to_string(),
                distance: 0.25,
            }],
        }]),
        ..Default::default()
    };

    let json = serde_json::to_string(&report).unwrap();
    let back: AnalysisReport = serde_json::from_str(&json).unwrap();

    assert_eq!(back.lemmas.as_deref(), Some(&[][..]));
    assert_eq!(back.entities.unwrap()[0].kind, EntityKind::Place);
    assert_eq!(back.alternatives.unwrap()[0].neighbors.len(), 1);
}

#[test]
fn entity_kind_labels_are_fixed() {
    assert_eq!(EntityKind::Person.label(), "Person");
    assert_eq!(EntityKind::Place.label(), "Place");
    assert_eq!(EntityKind::Organization.label(), "Organization");
}

#[test]
fn entity_filter_all_wants_every_kind() {
    let filter = EntityFilter::all();
    assert!(filter.any());
    assert!(filter.wants(EntityKind::Person));
    assert!(filter.wants(EntityKind::Place));
    assert!(filter.wants(EntityKind::Organization));

    let none = EntityFilter::default();
    assert!(!none.any());
    assert!(!none.wants(EntityKind::Person));
}
