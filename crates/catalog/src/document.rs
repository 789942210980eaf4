use liftplan_domain::{Exercise, ExerciseId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One entry of the external catalog document. Fields beyond the known ones
/// are preserved in `extra` so that rewriting the document loses no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub exercise_id: String,
    pub name: String,
    #[serde(default)]
    pub body_parts: Vec<String>,
    #[serde(default)]
    pub target_muscles: Vec<String>,
    #[serde(default)]
    pub equipments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Identifiers appear as strings or numbers in the wild.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        String(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::String(id) => id,
        Id::Number(id) => id.to_string(),
    })
}

impl From<ExerciseRecord> for Exercise {
    fn from(record: ExerciseRecord) -> Self {
        Exercise {
            id: ExerciseId::from(record.exercise_id),
            name: record.name,
            body_parts: record.body_parts,
            target_muscles: record.target_muscles,
            equipments: record.equipments,
            gif_url: record.gif_url,
        }
    }
}

/// The catalog document shape shared by the bundled catalog and the cleaned
/// output of the asset checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub success: bool,
    pub total: usize,
    #[serde(default)]
    pub data: Vec<ExerciseRecord>,
}

impl CatalogDocument {
    /// Parse a catalog document, tolerating a leading UTF-8 byte-order mark.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(
            input.strip_prefix('\u{feff}').unwrap_or(input),
        )?)
    }

    /// Build the cleaned output document from the kept records.
    #[must_use]
    pub fn cleaned(kept: Vec<ExerciseRecord>) -> Self {
        Self {
            success: true,
            total: kept.len(),
            data: kept,
        }
    }

    /// Convert all records into domain exercises.
    #[must_use]
    pub fn exercises(&self) -> Vec<Exercise> {
        self.data.iter().cloned().map(Exercise::from).collect()
    }
}

/// Entry of the removed-exercises output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedExercise {
    pub id: String,
    pub name: String,
}

impl From<&ExerciseRecord> for RemovedExercise {
    fn from(record: &ExerciseRecord) -> Self {
        Self {
            id: record.exercise_id.clone(),
            name: record.name.clone(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("invalid catalog document: {0}")]
    Json(#[from] serde_json::Error),
}
