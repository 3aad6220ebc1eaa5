//! # textlens-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the core data structures and contracts for `textlens`.
//! It contains only data types, Serde definitions, and `SCHEMA_VERSION`.
//!
//! ## What belongs here
//! * Pure data structs (reports, records, receipt envelope)
//! * Serialization/Deserialization logic
//! * Stability markers (SCHEMA_VERSION)
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Analysis logic

use serde::{Deserialize, Serialize};

/// The current schema version for the JSON receipt format.
pub const SCHEMA_VERSION: u32 = 1;

/// Language tag used when detection is disabled or inconclusive.
pub const UNDETERMINED_LANGUAGE: &str = "und";

/// Tool identity embedded in receipts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "textlens".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// A nearest-neighbor suggestion for a lemma.
///
/// `distance` is whatever metric the embedding provider ranks by; smaller
/// means closer. Consumers must treat the value as opaque.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alternative {
    pub word: String,
    pub distance: f64,
}

/// Alternatives grouped under the lemma they were looked up for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LemmaAlternatives {
    pub lemma: String,
    pub neighbors: Vec<Alternative>,
}

/// Named-entity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Person,
    Place,
    Organization,
}

impl EntityKind {
    /// Fixed output label, as printed in the entities section.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Person => "Person",
            EntityKind::Place => "Place",
            EntityKind::Organization => "Organization",
        }
    }
}

/// A single named-entity match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityRecord {
    pub kind: EntityKind,
    pub text: String,
}

/// Which entity categories the caller asked for.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityFilter {
    pub people: bool,
    pub places: bool,
    pub organizations: bool,
}

impl EntityFilter {
    pub fn all() -> Self {
        Self {
            people: true,
            places: true,
            organizations: true,
        }
    }

    pub fn any(&self) -> bool {
        self.people || self.places || self.organizations
    }

    pub fn wants(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Person => self.people,
            EntityKind::Place => self.places,
            EntityKind::Organization => self.organizations,
        }
    }
}

/// Aggregated analysis results for one invocation.
///
/// A field is `Some` exactly when the corresponding feature flag was
/// enabled; empty result lists stay `Some(vec![])` so the output layer can
/// still print the section header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lemmas: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<LemmaAlternatives>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<EntityRecord>>,
}

/// Echo of the effective arguments, embedded in JSON receipts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeArgsMeta {
    pub detect_language: bool,
    pub sentiment_analysis: bool,
    pub lemmatize: bool,
    pub alternatives: bool,
    pub people: bool,
    pub places: bool,
    pub organizations: bool,
    pub maximum_alternatives: usize,
    pub default_language: String,
}

/// JSON receipt envelope for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReceipt {
    pub schema_version: u32,
    pub generated_at_ms: u128,
    pub tool: ToolInfo,
    pub args: AnalyzeArgsMeta,
    pub report: AnalysisReport,
}
