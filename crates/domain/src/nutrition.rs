use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    /// Parse free-form user input. Anything other than "lose" or "gain" is
    /// treated as maintaining the current weight.
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "lose" => Goal::Lose,
            "gain" => Goal::Gain,
            _ => Goal::Maintain,
        }
    }

    /// Flat calorie adjustment applied on top of the activity-corrected base.
    #[must_use]
    fn calorie_adjustment(self) -> f64 {
        match self {
            Goal::Lose => -300.0,
            Goal::Maintain => 0.0,
            Goal::Gain => 250.0,
        }
    }

    /// Macro split as (protein, carb, fat) shares of total calories.
    #[must_use]
    pub fn macro_ratios(self) -> (f64, f64, f64) {
        match self {
            Goal::Lose => (0.30, 0.35, 0.35),
            Goal::Maintain => (0.25, 0.45, 0.30),
            Goal::Gain => (0.25, 0.50, 0.25),
        }
    }

    #[must_use]
    pub fn advisory(self) -> &'static str {
        match self {
            Goal::Lose => {
                "Aim for a slight calorie deficit with plenty of protein and regular strength training."
            }
            Goal::Maintain => {
                "Keep training and eating consistent to hold your current physique."
            }
            Goal::Gain => {
                "Aim for a moderate calorie surplus with high protein and regular strength training."
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
}

impl ActivityLevel {
    /// Parse free-form user input. Unrecognized input yields `None`, which
    /// the estimator treats as a neutral activity factor rather than an
    /// error.
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "low" => Some(ActivityLevel::Low),
            "medium" => Some(ActivityLevel::Medium),
            "high" => Some(ActivityLevel::High),
            _ => None,
        }
    }

    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Low => 0.95,
            ActivityLevel::Medium => 1.05,
            ActivityLevel::High => 1.15,
        }
    }
}

/// Daily calorie target and macro breakdown for a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionPlan {
    pub total_calories: i64,
    pub protein_grams: i64,
    pub carb_grams: i64,
    pub fat_grams: i64,
    pub advisory: &'static str,
}

#[derive(Error, Debug, PartialEq)]
pub enum NutritionError {
    #[error("Weight must be a positive number of kilograms")]
    InvalidWeight,
}

impl NutritionPlan {
    /// Estimate daily calories and macros from body weight, goal and
    /// activity level.
    ///
    /// The base of 30 kcal per kg approximates maintenance; the activity
    /// factor and the goal's flat adjustment are applied on top. Grams use
    /// the standard 4/4/9 kcal-per-gram conversion.
    pub fn estimate(
        weight_kg: f64,
        goal: Goal,
        activity: Option<ActivityLevel>,
    ) -> Result<Self, NutritionError> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(NutritionError::InvalidWeight);
        }

        let base = weight_kg * 30.0 * activity.map_or(1.0, ActivityLevel::factor)
            + goal.calorie_adjustment();

        #[allow(clippy::cast_possible_truncation)]
        let total_calories = base.round() as i64;
        let (protein_ratio, carb_ratio, fat_ratio) = goal.macro_ratios();

        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let grams = |ratio: f64, kcal_per_gram: f64| {
            (total_calories as f64 * ratio / kcal_per_gram).round() as i64
        };

        Ok(Self {
            total_calories,
            protein_grams: grams(protein_ratio, 4.0),
            carb_grams: grams(carb_ratio, 4.0),
            fat_grams: grams(fat_ratio, 9.0),
            advisory: goal.advisory(),
        })
    }
}
