mod nutrition;
mod report;

pub use nutrition::NutritionProfile;
pub use report::{CravingRecord, IngredientSwap, SubstitutionReport};
