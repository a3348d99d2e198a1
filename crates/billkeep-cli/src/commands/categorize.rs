//! Categorization commands

use anyhow::{anyhow, Result};
use billkeep_core::{Category, Categorizer};

/// Categorize free text with optional vendor/product hints
pub fn cmd_categorize(
    text: &str,
    vendor: Option<&str>,
    product: Option<&str>,
    json: bool,
) -> Result<()> {
    let categorizer = Categorizer::new();
    let result = categorizer.categorize(text, vendor, product);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Category:   {}", result.category);
    if let Some(subcategory) = &result.subcategory {
        println!("Subcategory: {}", subcategory);
    }
    println!("Confidence: {}%", result.confidence);

    Ok(())
}

/// List all categories with their subcategories
pub fn cmd_categories() -> Result<()> {
    let categorizer = Categorizer::new();

    println!("\nCategories");
    println!("{}", "─".repeat(70));

    for name in categorizer.categories() {
        let category: Category = name.parse().map_err(|e: String| anyhow!(e))?;
        let subcategories = categorizer.subcategories_for(category);
        if subcategories.is_empty() {
            println!("  {}", name);
        } else {
            println!("  {} ({})", name, subcategories.join(", "));
        }
    }
    println!();

    Ok(())
}
