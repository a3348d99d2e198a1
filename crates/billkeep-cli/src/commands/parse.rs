//! Saved OCR text parsing command

use std::path::Path;

use anyhow::{Context, Result};
use billkeep_core::BillParser;
use tracing::debug;

use super::print_bill;

/// Run the field extractor over a saved OCR text file
pub fn cmd_parse(file: &Path, json: bool) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    debug!(bytes = text.len(), "read OCR text");

    let parser = BillParser::new()?;
    let bill = parser.extract(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&bill)?);
        return Ok(());
    }

    println!("\n📄 {}", file.display());
    println!("{}", "─".repeat(70));
    print_bill(&bill);
    println!();

    Ok(())
}
