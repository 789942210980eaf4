#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod category;
mod curation;
mod exercise;
mod image;
mod nutrition;
mod plan;
mod sampling;

pub use category::Category;
pub use curation::curate;
pub use exercise::{Exercise, ExerciseId};
pub use image::ImageSource;
pub use nutrition::{ActivityLevel, Goal, NutritionError, NutritionPlan};
pub use plan::{PlanDay, PlanSlot, TrainingDays, WeeklyPlan, pick_exercises, split};
pub use sampling::sample;

/// Number of exercises shown when browsing a single category.
pub const DISPLAY_COUNT: usize = 8;

/// Number of exercises picked per category within a weekly-plan day.
pub const PLAN_SLOT_COUNT: usize = 2;
