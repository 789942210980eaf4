use rand::Rng;

use crate::{Category, Exercise, PLAN_SLOT_COUNT, curate, sample};

/// Number of training days in a weekly plan, clamped to the range [1, 7].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingDays(usize);

impl TrainingDays {
    #[must_use]
    pub fn new(days: i64) -> Self {
        #[allow(clippy::cast_sign_loss)]
        Self(days.clamp(1, 7) as usize)
    }

    /// Parse free-form user input. Non-numeric input falls back to a single
    /// training day rather than failing.
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        input.trim().parse().map_or(Self(1), Self::new)
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

/// Assign the main categories to training days.
///
/// The 1, 2 and 3 day splits are hardcoded push/pull/legs-style programs;
/// plain round-robin would split antagonist muscle groups awkwardly across so
/// few days. From 4 days upwards the categories are distributed round-robin
/// in enumeration order.
#[must_use]
pub fn split(days: TrainingDays) -> Vec<Vec<Category>> {
    match days.get() {
        1 => vec![Category::iter().copied().collect()],
        2 => vec![
            vec![
                Category::Chest,
                Category::Shoulders,
                Category::Triceps,
                Category::Core,
            ],
            vec![
                Category::Back,
                Category::Biceps,
                Category::Legs,
                Category::Core,
            ],
        ],
        3 => vec![
            vec![Category::Chest, Category::Shoulders, Category::Triceps],
            vec![Category::Back, Category::Biceps, Category::Core],
            vec![Category::Legs, Category::Core],
        ],
        n => {
            let mut result = vec![vec![]; n];
            for (i, category) in Category::iter().enumerate() {
                result[i % n].push(*category);
            }
            result
        }
    }
}

/// Pick up to `count` random exercises for a category: classify, curate, then
/// sample from the curated list.
#[must_use]
pub fn pick_exercises<R: Rng + ?Sized>(
    catalog: &[Exercise],
    category: Category,
    count: usize,
    rng: &mut R,
) -> Vec<Exercise> {
    let matching = catalog
        .iter()
        .filter(|exercise| category.matches(exercise))
        .cloned()
        .collect::<Vec<_>>();
    sample(&curate(&matching, category), count, rng)
}

/// A single weekly-plan slot: one exercise together with the category it was
/// picked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSlot {
    pub exercise: Exercise,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDay {
    pub categories: Vec<Category>,
    pub slots: Vec<PlanSlot>,
}

/// A freshly generated weekly plan. No identity persists across
/// regenerations, each request recomputes from the catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyPlan {
    pub days: Vec<PlanDay>,
}

impl WeeklyPlan {
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(
        catalog: &[Exercise],
        days: TrainingDays,
        rng: &mut R,
    ) -> Self {
        let days = split(days)
            .into_iter()
            .map(|categories| {
                let slots = categories
                    .iter()
                    .flat_map(|category| {
                        pick_exercises(catalog, *category, PLAN_SLOT_COUNT, rng)
                            .into_iter()
                            .map(|exercise| PlanSlot {
                                exercise,
                                category: *category,
                            })
                    })
                    .collect();
                PlanDay { categories, slots }
            })
            .collect();
        Self { days }
    }
}
