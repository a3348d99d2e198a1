//! Receipt processing pipeline
//!
//! Wires the OCR engine, field extractor, and categorizer together the way
//! the upload handler consumes them: recognize the image, extract structured
//! bill data, then categorize over the raw text plus the extracted vendor
//! and any user-supplied product name. The two core components never call
//! each other and share no state; only the OCR step can fail.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::categorize::Categorizer;
use crate::error::Result;
use crate::extract::BillParser;
use crate::models::{CategoryMatch, ExtractedBill};
use crate::ocr::OcrEngine;

/// A fully processed receipt: extracted fields plus category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedReceipt {
    pub bill: ExtractedBill,
    pub category: CategoryMatch,
}

/// End-to-end receipt processor
pub struct ReceiptPipeline<'a> {
    ocr: &'a dyn OcrEngine,
    parser: &'a BillParser,
    categorizer: &'a Categorizer,
}

impl<'a> ReceiptPipeline<'a> {
    pub fn new(
        ocr: &'a dyn OcrEngine,
        parser: &'a BillParser,
        categorizer: &'a Categorizer,
    ) -> Self {
        Self {
            ocr,
            parser,
            categorizer,
        }
    }

    /// Process a receipt image: recognize, extract, categorize
    ///
    /// Only recognition can fail; extraction and categorization degrade to
    /// unset fields and the `Other` fallback respectively.
    pub fn process_image(
        &self,
        image: &Path,
        product_name: Option<&str>,
    ) -> Result<ProcessedReceipt> {
        let recognized = self.ocr.recognize(image)?;
        let processed = self.process_text(&recognized.text, product_name);

        info!(
            image = %image.display(),
            vendor = processed.bill.vendor_name.as_deref().unwrap_or("unknown"),
            category = processed.category.category.as_str(),
            "processed receipt image"
        );

        Ok(processed)
    }

    /// Process already-recognized text. Infallible.
    pub fn process_text(&self, text: &str, product_name: Option<&str>) -> ProcessedReceipt {
        let bill = self.parser.extract(text);
        let category = self.categorizer.categorize(
            &bill.raw_text,
            bill.vendor_name.as_deref(),
            product_name,
        );

        ProcessedReceipt { bill, category }
    }
}
