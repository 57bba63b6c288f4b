pub mod cli;
pub mod decoder;
pub mod error;
pub mod interface;
pub mod models;
pub mod remote;

pub use decoder::{builtin_catalog, resolve, CravingCatalog};
pub use error::{CraveError, Result};
pub use models::{CravingRecord, IngredientSwap, NutritionProfile, SubstitutionReport};
