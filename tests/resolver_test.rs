use craveq_rs::decoder::data::{
    fallback_swaps, FALLBACK_NUTRITION, FALLBACK_SUBSTITUTION_NUTRITION,
};
use craveq_rs::models::{CravingRecord, NutritionProfile, SubstitutionReport};
use craveq_rs::{builtin_catalog, resolve, CravingCatalog};

fn stub_record(name: &str) -> CravingRecord {
    CravingRecord {
        name: name.to_string(),
        nutrition: NutritionProfile::new(100, 1.0, 1.0, 1.0, 1.0, 1.0),
        substitution: SubstitutionReport {
            title: format!("Better {}", name),
            nutrition: NutritionProfile::new(50, 1.0, 1.0, 1.0, 1.0, 1.0),
            swaps: vec![],
            summary: String::new(),
        },
    }
}

#[test]
fn case_and_whitespace_insensitive_for_every_key() {
    let catalog = builtin_catalog();

    for (key, _) in catalog.entries() {
        let canonical = catalog.resolve(key);
        assert_eq!(canonical, catalog.resolve(&key.to_uppercase()), "key: {}", key);
        assert_eq!(
            canonical,
            catalog.resolve(&format!("  {}  ", key)),
            "key: {}",
            key
        );
    }
}

#[test]
fn burger_resolves_to_classic_burger() {
    let record = resolve("burger");
    assert_eq!(record.name, "Classic Burger");
    assert_eq!(record.nutrition.calories, 540);
    assert_eq!(record.substitution.title, "Umami Mushroom Stack");
    assert_eq!(record.substitution.nutrition.calories, 310);
}

#[test]
fn cheeseburger_partial_matches_burger() {
    // "cheeseburger" contains the key "burger".
    assert_eq!(resolve("Cheeseburger").name, "Classic Burger");
}

#[test]
fn key_containing_query_also_partial_matches() {
    // "cream" is contained in the key "ice cream".
    assert_eq!(resolve("cream").name, "Vanilla Ice Cream");
}

#[test]
fn unknown_input_takes_fallback_path() {
    let record = resolve("xyzzy-nonsense-42");

    assert_eq!(record.name, "xyzzy-nonsense-42");
    assert_eq!(record.substitution.title, "Alchemized xyzzy-nonsense-42");
    assert_eq!(record.nutrition, FALLBACK_NUTRITION);
    assert_eq!(record.nutrition.calories, 450);
    assert_eq!(record.substitution.nutrition, FALLBACK_SUBSTITUTION_NUTRITION);
    assert_eq!(record.substitution.nutrition.calories, 260);
    assert_eq!(record.substitution.swaps, fallback_swaps());
    assert_eq!(record.substitution.swaps.len(), 4);
    assert_eq!(record.substitution.swaps[0].introduced, "Whole-food protein base");
}

#[test]
fn fallback_preserves_input_verbatim() {
    // Name and title echo the raw input, untrimmed and unlowered.
    let record = resolve("  Midnight SNACK  ");
    assert_eq!(record.name, "  Midnight SNACK  ");
    assert_eq!(record.substitution.title, "Alchemized   Midnight SNACK  ");
}

#[test]
fn resolve_is_idempotent() {
    // Catalog hit.
    assert_eq!(resolve("pizza"), resolve("pizza"));
    // Fallback: fresh allocations, field-for-field equal.
    assert_eq!(resolve("gibberish"), resolve("gibberish"));
}

#[test]
fn burger_calorie_reduction_is_43_percent() {
    let record = resolve("burger");
    assert_eq!(record.calorie_reduction_percent(), Some(43));
}

#[test]
fn earlier_declaration_wins_partial_match_ties() {
    // Both keys are substrings of the query; the first declared wins.
    let catalog = CravingCatalog::new(vec![
        ("noodle".to_string(), stub_record("Noodle")),
        ("soup".to_string(), stub_record("Soup")),
    ]);
    assert_eq!(catalog.resolve("noodle soup bowl").name, "Noodle");

    // Reversed declaration order flips the winner.
    let catalog = CravingCatalog::new(vec![
        ("soup".to_string(), stub_record("Soup")),
        ("noodle".to_string(), stub_record("Noodle")),
    ]);
    assert_eq!(catalog.resolve("noodle soup bowl").name, "Soup");
}

#[test]
fn empty_and_whitespace_input_take_fallback_path() {
    // An empty normalized query must not vacuously match the first entry.
    let empty = resolve("");
    assert_eq!(empty.name, "");
    assert_eq!(empty.substitution.title, "Alchemized ");
    assert_eq!(empty.nutrition, FALLBACK_NUTRITION);

    let blank = resolve("   ");
    assert_eq!(blank.name, "   ");
    assert_eq!(blank.nutrition, FALLBACK_NUTRITION);
    assert_eq!(blank.substitution.swaps, fallback_swaps());
}

#[test]
fn catalog_records_are_not_affected_by_caller_mutation() {
    let mut record = resolve("fries");
    record.substitution.swaps.clear();
    record.name.push_str(" (edited)");

    // The catalog's copy is untouched.
    let fresh = resolve("fries");
    assert_eq!(fresh.name, "French Fries");
    assert_eq!(fresh.substitution.swaps.len(), 4);
}
