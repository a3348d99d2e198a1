//! Receipt image scanning command

use std::path::Path;

use anyhow::{anyhow, Result};
use billkeep_core::{BillParser, Categorizer, ReceiptPipeline, TesseractEngine};

use super::print_bill;

/// Scan a receipt image through the full pipeline
pub fn cmd_scan(
    image: &Path,
    product: Option<&str>,
    tesseract: &Path,
    json: bool,
) -> Result<()> {
    if !image.exists() {
        return Err(anyhow!("Image not found: {}", image.display()));
    }

    let engine = TesseractEngine::new().with_binary(tesseract);
    let parser = BillParser::new()?;
    let categorizer = Categorizer::new();
    let pipeline = ReceiptPipeline::new(&engine, &parser, &categorizer);

    let processed = pipeline.process_image(image, product)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&processed)?);
        return Ok(());
    }

    println!("\n🧾 {}", image.display());
    println!("{}", "─".repeat(70));
    print_bill(&processed.bill);

    let subcategory = processed
        .category
        .subcategory
        .as_deref()
        .map(|s| format!(" > {}", s))
        .unwrap_or_default();
    println!(
        "  Category: {}{} ({}%)",
        processed.category.category, subcategory, processed.category.confidence
    );
    println!();

    Ok(())
}
