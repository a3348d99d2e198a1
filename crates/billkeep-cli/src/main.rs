//! Billkeep CLI - Receipt scanning and categorization
//!
//! Usage:
//!   billkeep scan --image receipt.jpg     Scan an image (requires tesseract)
//!   billkeep parse --file text.txt        Parse saved OCR text
//!   billkeep categorize --text "..."      Categorize free text
//!   billkeep categories                   List the category table

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Scan {
            image,
            product,
            tesseract,
            json,
        } => commands::cmd_scan(&image, product.as_deref(), &tesseract, json),
        Commands::Parse { file, json } => commands::cmd_parse(&file, json),
        Commands::Categorize {
            text,
            vendor,
            product,
            json,
        } => commands::cmd_categorize(&text, vendor.as_deref(), product.as_deref(), json),
        Commands::Categories => commands::cmd_categories(),
    }
}
