use serde::{Deserialize, Serialize};

/// Nutrition facts for a single dish.
///
/// Values are author-supplied constants; no cross-field invariant is
/// enforced (macros need not sum to calories).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionProfile {
    /// Kilocalories.
    pub calories: u32,

    /// Protein in grams.
    pub protein: f64,

    /// Carbohydrates in grams.
    pub carbs: f64,

    /// Fat in grams.
    pub fat: f64,

    /// Fiber in grams.
    pub fiber: f64,

    /// Sugar in grams.
    pub sugar: f64,
}

impl NutritionProfile {
    pub const fn new(calories: u32, protein: f64, carbs: f64, fat: f64, fiber: f64, sugar: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            fiber,
            sugar,
        }
    }

    /// Percentage of calories saved by switching to `healthier`, rounded to
    /// the nearest integer (ties away from zero).
    ///
    /// Returns `None` when this profile has zero calories, since the
    /// reduction is undefined in that case. Negative values mean the
    /// alternative is heavier than the original.
    pub fn calorie_reduction_percent(&self, healthier: &NutritionProfile) -> Option<i64> {
        if self.calories == 0 {
            return None;
        }

        let orig = self.calories as f64;
        let sub = healthier.calories as f64;
        Some((100.0 * (orig - sub) / orig).round() as i64)
    }

    /// Basic validation: gram fields must be non-negative and finite.
    pub fn is_valid(&self) -> bool {
        [self.protein, self.carbs, self.fat, self.fiber, self.sugar]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }

    /// Compact one-line summary for display.
    pub fn summary_line(&self) -> String {
        format!(
            "{} kcal | P:{}g C:{}g F:{}g | fiber:{}g sugar:{}g",
            self.calories, self.protein, self.carbs, self.fat, self.fiber, self.sugar
        )
    }
}
