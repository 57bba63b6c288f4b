use serde::{Deserialize, Serialize};

use crate::models::NutritionProfile;

/// One ingredient substitution inside a reconstructed dish.
///
/// Purely descriptive; nothing downstream computes on these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientSwap {
    /// Name of the substituted ingredient.
    pub introduced: String,

    /// The original ingredient or component it stands in for.
    pub replaces: String,

    /// Free-text explanation of why the swap works.
    pub rationale: String,
}

impl IngredientSwap {
    pub fn new(introduced: &str, replaces: &str, rationale: &str) -> Self {
        Self {
            introduced: introduced.to_string(),
            replaces: replaces.to_string(),
            rationale: rationale.to_string(),
        }
    }
}

/// The "healthier alternative" payload for a craving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionReport {
    /// Name of the reconstructed dish.
    pub title: String,

    /// Nutrition of the reconstructed dish.
    pub nutrition: NutritionProfile,

    /// Ingredient swaps in display order, top to bottom.
    pub swaps: Vec<IngredientSwap>,

    /// Free-text closing statement.
    pub summary: String,
}

/// A detected craving paired with its substitution report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CravingRecord {
    /// Canonical display name of the detected craving.
    pub name: String,

    /// Nutrition of the original food.
    pub nutrition: NutritionProfile,

    /// The healthier reconstruction.
    pub substitution: SubstitutionReport,
}

impl CravingRecord {
    /// Calorie reduction of the substitution relative to the original,
    /// `None` when the original has zero calories.
    pub fn calorie_reduction_percent(&self) -> Option<i64> {
        self.nutrition
            .calorie_reduction_percent(&self.substitution.nutrition)
    }
}
