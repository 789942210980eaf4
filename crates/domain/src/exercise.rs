use std::fmt::{self, Display};

/// Immutable catalog entry. Sourced from the external catalog document and
/// never mutated by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: String,
    pub body_parts: Vec<String>,
    pub target_muscles: Vec<String>,
    pub equipments: Vec<String>,
    pub gif_url: Option<String>,
}

impl Exercise {
    #[must_use]
    pub fn has_animated_image(&self) -> bool {
        self.gif_url.as_ref().is_some_and(|url| !url.is_empty())
    }
}

#[derive(Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseId(String);

impl ExerciseId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ExerciseId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ExerciseId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
