//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Billkeep - Receipt scanning and categorization
#[derive(Parser)]
#[command(name = "billkeep")]
#[command(about = "Extract and categorize structured data from receipts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a receipt image and extract structured data
    Scan {
        /// Receipt image to process
        #[arg(short, long)]
        image: PathBuf,

        /// Product name hint for categorization
        #[arg(short, long)]
        product: Option<String>,

        /// Path to the tesseract binary
        #[arg(long, default_value = "tesseract")]
        tesseract: PathBuf,

        /// Emit JSON instead of human-readable output
        #[arg(long)]
        json: bool,
    },

    /// Parse previously recognized OCR text from a file
    Parse {
        /// Text file containing raw OCR output
        #[arg(short, long)]
        file: PathBuf,

        /// Emit JSON instead of human-readable output
        #[arg(long)]
        json: bool,
    },

    /// Categorize free text against the category rule table
    Categorize {
        /// Text to categorize
        #[arg(short, long)]
        text: String,

        /// Vendor name hint
        #[arg(long)]
        vendor: Option<String>,

        /// Product name hint
        #[arg(long)]
        product: Option<String>,

        /// Emit JSON instead of human-readable output
        #[arg(long)]
        json: bool,
    },

    /// List all categories and their subcategories
    Categories,
}
