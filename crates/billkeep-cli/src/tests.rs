//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::NamedTempFile;

use crate::cli::{Cli, Commands};
use crate::commands;

// ========== Command Tests ==========

#[test]
fn test_cmd_parse_reads_ocr_text() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Acme Hardware\nHammer $12.99\nTotal: $12.99").unwrap();

    assert!(commands::cmd_parse(file.path(), false).is_ok());
    assert!(commands::cmd_parse(file.path(), true).is_ok());
}

#[test]
fn test_cmd_parse_missing_file_errors() {
    let result = commands::cmd_parse(Path::new("/nonexistent/ocr.txt"), false);
    assert!(result.is_err());
}

#[test]
fn test_cmd_scan_missing_image_errors() {
    let result = commands::cmd_scan(
        Path::new("/nonexistent/receipt.jpg"),
        None,
        Path::new("tesseract"),
        false,
    );
    assert!(result.is_err());
}

#[test]
fn test_cmd_categorize() {
    assert!(commands::cmd_categorize("grocery run", Some("Kroger"), None, false).is_ok());
    assert!(commands::cmd_categorize("grocery run", Some("Kroger"), None, true).is_ok());
}

#[test]
fn test_cmd_categories() {
    assert!(commands::cmd_categories().is_ok());
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_cli_parses_scan_args() {
    let cli = Cli::try_parse_from([
        "billkeep", "scan", "--image", "r.jpg", "--product", "milk", "--json",
    ])
    .unwrap();

    match cli.command {
        Commands::Scan {
            image,
            product,
            tesseract,
            json,
        } => {
            assert_eq!(image, PathBuf::from("r.jpg"));
            assert_eq!(product.as_deref(), Some("milk"));
            assert_eq!(tesseract, PathBuf::from("tesseract"));
            assert!(json);
        }
        _ => panic!("expected scan command"),
    }
}

#[test]
fn test_cli_parses_categorize_args() {
    let cli = Cli::try_parse_from([
        "billkeep",
        "categorize",
        "--text",
        "new laptop",
        "--vendor",
        "Best Buy",
    ])
    .unwrap();

    match cli.command {
        Commands::Categorize {
            text,
            vendor,
            product,
            json,
        } => {
            assert_eq!(text, "new laptop");
            assert_eq!(vendor.as_deref(), Some("Best Buy"));
            assert!(product.is_none());
            assert!(!json);
        }
        _ => panic!("expected categorize command"),
    }
}

#[test]
fn test_cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["billkeep"]).is_err());
}

#[test]
fn test_cli_verbose_is_global() {
    let cli = Cli::try_parse_from(["billkeep", "categories", "--verbose"]).unwrap();
    assert!(cli.verbose);
}
