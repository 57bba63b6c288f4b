mod catalog;
pub mod data;

use std::sync::LazyLock;

pub use catalog::CravingCatalog;

use crate::models::CravingRecord;

static BUILTIN_CATALOG: LazyLock<CravingCatalog> = LazyLock::new(CravingCatalog::builtin);

/// The process-wide built-in catalog, constructed on first use.
pub fn builtin_catalog() -> &'static CravingCatalog {
    &BUILTIN_CATALOG
}

/// Decode a craving against the built-in catalog.
pub fn resolve(query: &str) -> CravingRecord {
    builtin_catalog().resolve(query)
}
