use std::{
    fmt::{self, Display},
    slice::Iter,
};

use crate::Exercise;

/// Body-part grouping used for filtering, curation and weekly-plan
/// distribution. The set is closed: every exercise belongs to zero or more
/// categories, decided purely by its tags.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Category {
    Chest,
    Back,
    Legs,
    Shoulders,
    Triceps,
    Biceps,
    Core,
}

impl Category {
    /// All categories in weekly-plan assignment order.
    #[must_use]
    pub fn iter() -> Iter<'static, Category> {
        static CATEGORIES: [Category; 7] = [
            Category::Chest,
            Category::Back,
            Category::Legs,
            Category::Shoulders,
            Category::Triceps,
            Category::Biceps,
            Category::Core,
        ];
        CATEGORIES.iter()
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Category::Chest => "Chest",
            Category::Back => "Back",
            Category::Legs => "Legs",
            Category::Shoulders => "Shoulders",
            Category::Triceps => "Triceps",
            Category::Biceps => "Biceps",
            Category::Core => "Core",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Category::Chest => {
                "Trains the pectorals and front delts, best stimulated by pressing and fly movements."
            }
            Category::Back => {
                "Improves posture and pulling strength with rows, pulldowns and pull-ups."
            }
            Category::Legs => {
                "Squats, deadlifts and leg presses build the thighs, hamstrings and glutes."
            }
            Category::Shoulders => {
                "Builds a wider upper body with overhead presses and raise variations."
            }
            Category::Triceps => {
                "Extends the elbow, targeted by pushdown and extension movements."
            }
            Category::Biceps => "Flexes the elbow, targeted by curl variations.",
            Category::Core => {
                "Abs and deep stabilizers, supporting whole-body strength and balance."
            }
        }
    }

    /// Body-part tags whose exact (case-insensitive) presence places an
    /// exercise in this category.
    #[must_use]
    pub fn part_tags(self) -> &'static [&'static str] {
        match self {
            Category::Chest => &["chest"],
            Category::Back => &["back"],
            Category::Legs => &["upper legs", "lower legs"],
            Category::Shoulders => &["shoulders"],
            Category::Triceps | Category::Biceps => &[],
            Category::Core => &["waist"],
        }
    }

    /// Target-muscle substrings whose presence places an exercise in this
    /// category.
    #[must_use]
    pub fn muscle_keywords(self) -> &'static [&'static str] {
        match self {
            Category::Chest => &["chest", "pectoral"],
            Category::Back => &[],
            Category::Legs => &["quads", "quadriceps", "hamstrings", "glutes", "calves"],
            Category::Shoulders => &["shoulder", "delts", "deltoid"],
            Category::Triceps => &["triceps"],
            Category::Biceps => &["biceps"],
            Category::Core => &["abs", "abdominals", "obliques", "core"],
        }
    }

    /// Name substrings that exclude an exercise from this category's curated
    /// list. Shared by the curator and the offline asset checker.
    #[must_use]
    pub fn banned_names(self) -> &'static [&'static str] {
        match self {
            Category::Chest => &["high style scapula push-up", "scapula push-up"],
            Category::Back => &["inverted row bent knees", "barbell incline row"],
            Category::Triceps => &["handstand"],
            Category::Legs => &[
                "squat on bosu ball",
                "bosu ball",
                "assisted prone lying quads stretch",
                "lying (side) quads stretch",
                "lying side quads stretch",
            ],
            Category::Core => &["barbell press sit-up", "barbell press sit up", "sledge hammer"],
            Category::Biceps | Category::Shoulders => &[],
        }
    }

    /// Name substrings that move an exercise to the front of this category's
    /// curated list.
    #[must_use]
    pub fn preferred_names(self) -> &'static [&'static str] {
        match self {
            Category::Chest => &["bench press", "press", "push up", "push-up", "fly"],
            Category::Back => &["lat pulldown", "pull-down", "pulldown", "row", "deadlift"],
            Category::Triceps => &["triceps", "dumbbell", "extension", "pushdown", "skullcrusher"],
            Category::Biceps => &["curl", "biceps", "dumbbell"],
            Category::Legs => &["squat", "deadlift", "leg press", "hack squat", "lunge", "machine"],
            Category::Shoulders => &["press", "overhead", "lateral raise", "face pull"],
            Category::Core => &["plank", "crunch", "leg raise", "twist", "sit-up", "sit up"],
        }
    }

    /// Whether the exercise belongs to this category, decided purely by its
    /// body-part and target-muscle tags.
    #[must_use]
    pub fn matches(self, exercise: &Exercise) -> bool {
        let part_match = self.part_tags().iter().any(|tag| {
            exercise
                .body_parts
                .iter()
                .any(|part| part.eq_ignore_ascii_case(tag))
        });
        let muscle_match = self.muscle_keywords().iter().any(|keyword| {
            exercise
                .target_muscles
                .iter()
                .any(|muscle| muscle.to_lowercase().contains(keyword))
        });
        part_match || muscle_match
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::ExerciseId;

    fn exercise(name: &str, body_parts: &[&str], target_muscles: &[&str]) -> Exercise {
        Exercise {
            id: ExerciseId::from("0001"),
            name: name.to_string(),
            body_parts: body_parts.iter().map(ToString::to_string).collect(),
            target_muscles: target_muscles.iter().map(ToString::to_string).collect(),
            equipments: vec![],
            gif_url: None,
        }
    }

    #[rstest]
    #[case(Category::Chest, &["chest"], &[], true)]
    #[case(Category::Chest, &[], &["upper pectorals"], true)]
    #[case(Category::Chest, &["upper arms"], &["triceps"], false)]
    #[case(Category::Back, &["back"], &[], true)]
    #[case(Category::Back, &[], &["lats"], false)]
    #[case(Category::Triceps, &["upper arms"], &["triceps"], true)]
    #[case(Category::Triceps, &["upper arms"], &["biceps"], false)]
    #[case(Category::Biceps, &["upper arms"], &["Biceps Brachii"], true)]
    #[case(Category::Legs, &["upper legs"], &[], true)]
    #[case(Category::Legs, &["lower legs"], &[], true)]
    #[case(Category::Legs, &[], &["hamstrings"], true)]
    #[case(Category::Legs, &[], &["calves"], true)]
    #[case(Category::Legs, &["waist"], &["abs"], false)]
    #[case(Category::Shoulders, &["shoulders"], &[], true)]
    #[case(Category::Shoulders, &[], &["rear deltoid"], true)]
    #[case(Category::Core, &["waist"], &[], true)]
    #[case(Category::Core, &[], &["obliques"], true)]
    #[case(Category::Core, &["chest"], &["pectorals"], false)]
    fn test_matches(
        #[case] category: Category,
        #[case] body_parts: &[&str],
        #[case] target_muscles: &[&str],
        #[case] expected: bool,
    ) {
        let exercise = exercise("test exercise", body_parts, target_muscles);
        assert_eq!(category.matches(&exercise), expected);
        // Classification is a pure function of the tags.
        assert_eq!(category.matches(&exercise), expected);
    }

    #[test]
    fn test_iter_yields_each_category_once() {
        let categories = Category::iter().collect::<Vec<_>>();
        assert_eq!(categories.len(), 7);
        assert_eq!(categories.iter().collect::<HashSet<_>>().len(), 7);
        assert_eq!(categories[0], &Category::Chest);
        assert_eq!(categories[6], &Category::Core);
    }

    #[test]
    fn test_titles_and_descriptions_are_non_empty() {
        for category in Category::iter() {
            assert!(!category.title().is_empty());
            assert!(!category.description().is_empty());
        }
    }
}
