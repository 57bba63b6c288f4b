use std::fs;
use std::path::Path;

use crate::decoder::CravingCatalog;
use crate::error::Result;
use crate::models::CravingRecord;

/// Display a decoded craving as a formatted report.
pub fn display_craving_report(record: &CravingRecord) {
    println!();
    println!("=== Craving Decoded: {} ===", record.name);
    println!();
    println!("Original:       {}", record.nutrition.summary_line());
    println!("Reconstruction: {}", record.substitution.title);
    println!("                {}", record.substitution.nutrition.summary_line());

    match record.calorie_reduction_percent() {
        Some(pct) => println!("Calorie reduction: {}%", pct),
        None => println!("Calorie reduction: undefined (original has zero calories)"),
    }

    if !record.substitution.swaps.is_empty() {
        println!();
        println!("--- Ingredient swaps ---");

        let max_name_len = record
            .substitution
            .swaps
            .iter()
            .map(|s| s.introduced.len())
            .max()
            .unwrap_or(10);

        for (i, swap) in record.substitution.swaps.iter().enumerate() {
            println!(
                "{:>3}. {:<width$}  replaces {}",
                i + 1,
                swap.introduced,
                swap.replaces,
                width = max_name_len
            );
            println!("     {}", swap.rationale);
        }
    }

    println!();
    println!("--- Summary ---");
    println!("{}", record.substitution.summary);
    println!();
}

/// Display the catalog entries as a compact table.
pub fn display_catalog(catalog: &CravingCatalog) {
    if catalog.is_empty() {
        println!("Catalog is empty.");
        return;
    }

    println!();
    println!("=== Craving Catalog ({} entries) ===", catalog.len());
    println!();

    let max_name_len = catalog
        .entries()
        .map(|(_, r)| r.name.len())
        .max()
        .unwrap_or(10);

    for (key, record) in catalog.entries() {
        let reduction = record
            .calorie_reduction_percent()
            .map(|pct| format!("-{}%", pct))
            .unwrap_or_else(|| "n/a".to_string());

        println!(
            "  {:<width$} - {:>4} kcal -> {} ({} kcal, {})  [key: {}]",
            record.name,
            record.nutrition.calories,
            record.substitution.title,
            record.substitution.nutrition.calories,
            reduction,
            key,
            width = max_name_len
        );
    }

    println!();
}

/// Write the catalog to a JSON file, pretty-printed.
pub fn export_catalog<P: AsRef<Path>>(path: P, catalog: &CravingCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}
