//! Integration tests for billkeep-core
//!
//! These tests exercise the full recognize → extract → categorize pipeline
//! against a mock OCR engine.

use std::path::Path;

use billkeep_core::{
    BillParser, Categorizer, Error, OcrEngine, ReceiptPipeline, RecognizedText, Result,
};
use billkeep_core::models::Category;

/// Mock OCR engine returning canned text
struct MockOcr {
    text: &'static str,
}

impl OcrEngine for MockOcr {
    fn recognize(&self, _image: &Path) -> Result<RecognizedText> {
        Ok(RecognizedText {
            text: self.text.to_string(),
        })
    }
}

/// Mock OCR engine that always fails
struct FailingOcr;

impl OcrEngine for FailingOcr {
    fn recognize(&self, image: &Path) -> Result<RecognizedText> {
        Err(Error::Ocr(format!("image unreadable: {}", image.display())))
    }
}

/// A plausible grocery receipt as tesseract would emit it
fn grocery_receipt() -> &'static str {
    "Whole Foods Market\n\
     456 Oak Ave\n\
     12/05/2023\n\
     Organic Apples $4.99\n\
     Bread $2.99\n\
     Total: $7.98"
}

#[test]
fn test_full_pipeline_over_mock_engine() {
    let ocr = MockOcr {
        text: grocery_receipt(),
    };
    let parser = BillParser::new().unwrap();
    let categorizer = Categorizer::new();
    let pipeline = ReceiptPipeline::new(&ocr, &parser, &categorizer);

    let processed = pipeline
        .process_image(Path::new("receipt.jpg"), None)
        .expect("mock recognition succeeds");

    // Extraction
    assert_eq!(
        processed.bill.vendor_name.as_deref(),
        Some("Whole Foods Market")
    );
    assert_eq!(processed.bill.date.as_deref(), Some("12/05/2023"));
    assert_eq!(processed.bill.total_amount.as_deref(), Some("7.98"));
    assert!(processed
        .bill
        .items
        .iter()
        .any(|i| i.description == "Organic Apples"));
    assert!(processed.bill.items.iter().any(|i| i.description == "Bread"));

    // Categorization: vendor "whole foods" (10) + keyword "food" (5) over
    // 26 Food & Beverages rules
    assert_eq!(processed.category.category, Category::FoodBeverages);
    assert_eq!(processed.category.confidence, 58);
    assert_eq!(processed.category.subcategory.as_deref(), Some("Groceries"));
}

#[test]
fn test_pipeline_text_path_matches_image_path() {
    let ocr = MockOcr {
        text: grocery_receipt(),
    };
    let parser = BillParser::new().unwrap();
    let categorizer = Categorizer::new();
    let pipeline = ReceiptPipeline::new(&ocr, &parser, &categorizer);

    let via_image = pipeline
        .process_image(Path::new("receipt.jpg"), Some("apples"))
        .unwrap();
    let via_text = pipeline.process_text(grocery_receipt(), Some("apples"));

    assert_eq!(via_image.bill, via_text.bill);
    assert_eq!(via_image.category, via_text.category);
}

#[test]
fn test_recognition_failure_surfaces_as_ocr_error() {
    let ocr = FailingOcr;
    let parser = BillParser::new().unwrap();
    let categorizer = Categorizer::new();
    let pipeline = ReceiptPipeline::new(&ocr, &parser, &categorizer);

    let err = pipeline
        .process_image(Path::new("blurry.jpg"), None)
        .unwrap_err();
    assert!(matches!(err, Error::Ocr(_)));
}

#[test]
fn test_noisy_text_degrades_to_unset_fields_and_other() {
    let ocr = MockOcr {
        text: "@@ ## ~~\nzz\n!! ??",
    };
    let parser = BillParser::new().unwrap();
    let categorizer = Categorizer::new();
    let pipeline = ReceiptPipeline::new(&ocr, &parser, &categorizer);

    let processed = pipeline.process_image(Path::new("noise.jpg"), None).unwrap();
    assert!(processed.bill.total_amount.is_none());
    assert!(processed.bill.date.is_none());
    assert!(processed.bill.vendor_name.is_none());
    assert!(processed.bill.items.is_empty());
    assert_eq!(processed.category.category, Category::Other);
    assert_eq!(processed.category.confidence, 100);
}

#[test]
fn test_processed_receipt_serializes_to_stable_json() {
    let parser = BillParser::new().unwrap();
    let categorizer = Categorizer::new();
    let ocr = MockOcr {
        text: grocery_receipt(),
    };
    let pipeline = ReceiptPipeline::new(&ocr, &parser, &categorizer);

    let processed = pipeline.process_text(grocery_receipt(), None);
    let json = serde_json::to_value(&processed).unwrap();

    assert_eq!(json["bill"]["vendorName"], "Whole Foods Market");
    assert_eq!(json["bill"]["totalAmount"], "7.98");
    assert_eq!(json["category"]["category"], "Food & Beverages");
}
