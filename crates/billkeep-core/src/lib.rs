//! Billkeep Core Library
//!
//! Shared functionality for the Billkeep receipt manager:
//! - Rule-based field extraction from OCR'd receipt text
//! - Weighted keyword/vendor categorization
//! - Pluggable OCR engine boundary (Tesseract subprocess driver)
//! - Receipt processing pipeline (recognize, extract, categorize)

pub mod categorize;
pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;
pub mod pipeline;

pub use categorize::{CategoryRule, Categorizer};
pub use error::{Error, Result};
pub use extract::BillParser;
pub use models::{Category, CategoryMatch, ExtractedBill, LineItem};
pub use ocr::{OcrEngine, RecognizedText, TesseractEngine};
pub use pipeline::{ProcessedReceipt, ReceiptPipeline};
