//! Receipt field extraction
//!
//! Turns raw OCR text into structured bill data (vendor, date, total, line
//! items) using priority-ordered pattern tables. Receipts have no fixed
//! schema, so each field is resolved by the first plausible match and left
//! unset when nothing matches: a wrong total is worse than a missing one.
//!
//! Extraction never fails. Malformed, empty, or adversarial input simply
//! degrades to fewer populated fields.

use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::models::{ExtractedBill, LineItem};

/// How many leading lines (after blank-line filtering) are considered when
/// looking for the vendor name.
const VENDOR_SCAN_LINES: usize = 5;

/// Substrings that disqualify a header line from being a vendor name.
/// Fixed, English-only list; not configurable.
const VENDOR_EXCLUSIONS: [&str; 5] = ["RECEIPT", "INVOICE", "BILL", "DATE", "TIME"];

/// Item row shapes, tried in declared order per line
#[derive(Debug, Clone, Copy)]
enum ItemRowKind {
    /// `description qty unit_price amount`
    Full,
    /// `description amount`
    Simple,
    /// `qty x description [= ][$]amount`
    Multiplier,
}

/// Rule-based receipt text parser
///
/// Holds the compiled pattern tables. Construct once and reuse; `extract`
/// is a pure function of its input and is safe to call concurrently.
pub struct BillParser {
    total_patterns: Vec<Regex>,
    date_patterns: Vec<Regex>,
    item_patterns: Vec<(ItemRowKind, Regex)>,
    vendor_strip: Regex,
    whitespace: Regex,
}

impl BillParser {
    pub fn new() -> Result<Self> {
        let total_patterns = vec![
            // Label-prefixed amount: "Total: $42.50", "Subtotal 10.00"
            Regex::new(
                r"(?i)(?:total|balance|amount|grand\s*total|net\s*total|subtotal)\s*:?\s*\$?([0-9]+[.,]?[0-9]*)\s*(?:USD|INR|EUR|\$)?",
            )?,
            // Currency symbol first, label after: "$ 42.50 total"
            Regex::new(r"(?i)\$\s*([0-9]+[.,]?[0-9]*)\s*(?:total|balance)")?,
            // Bare number followed by label: "42.50 BALANCE"
            Regex::new(r"(?i)([0-9]+[.,]?[0-9]*)\s*(?:total|balance)")?,
        ];

        let date_patterns = vec![
            // Numeric D/M/Y with /, - or . separators
            Regex::new(r"(\d{1,2}[/.-]\d{1,2}[/.-]\d{2,4})")?,
            // ISO-ordered Y/M/D
            Regex::new(r"(\d{4}[/.-]\d{1,2}[/.-]\d{1,2})")?,
            // Day + English month abbreviation + year: "12 Mar 2023"
            Regex::new(
                r"(?i)(\d{1,2}\s+(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\s+\d{2,4})",
            )?,
            // Explicit date label
            Regex::new(r"(?i)(?:date|dated?)\s*:?\s*(\d{1,2}[/.-]\d{1,2}[/.-]\d{2,4})")?,
        ];

        let item_patterns = vec![
            (
                ItemRowKind::Full,
                Regex::new(r"^(.{3,30})\s+(\d+)\s+([0-9.,]+)\s+([0-9.,]+)$")?,
            ),
            (
                ItemRowKind::Simple,
                Regex::new(r"^(.{3,40})\s+\$?([0-9.,]+)$")?,
            ),
            (
                ItemRowKind::Multiplier,
                Regex::new(r"(?i)^(\d+)\s*x\s*(.{3,30})\s*=?\s*\$?([0-9.,]+)$")?,
            ),
        ];

        Ok(Self {
            total_patterns,
            date_patterns,
            item_patterns,
            vendor_strip: Regex::new(r"[^a-zA-Z0-9\s&.-]")?,
            whitespace: Regex::new(r"\s+")?,
        })
    }

    /// Extract structured bill data from raw OCR text
    ///
    /// Single forward pass over the non-blank lines. Total, date, and vendor
    /// are each resolved at most once, on their first match; every line is a
    /// fresh opportunity to emit an item. Field resolution is independent per
    /// line: the same line can anchor the total and emit an item.
    pub fn extract(&self, raw_text: &str) -> ExtractedBill {
        let lines: Vec<&str> = raw_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let mut total_amount: Option<String> = None;
        let mut date: Option<String> = None;
        let mut vendor_name: Option<String> = None;
        let mut items: Vec<LineItem> = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            if total_amount.is_none() {
                total_amount = self.match_total(line);
            }

            if date.is_none() {
                date = self.match_date(line);
            }

            // Vendor identity only plausibly lives in the receipt header
            if vendor_name.is_none() && i < VENDOR_SCAN_LINES {
                vendor_name = self.match_vendor(line);
            }

            if let Some(item) = self.match_item(line) {
                items.push(item);
            }
        }

        // Re-check vendor length after the pass
        if let Some(v) = &vendor_name {
            if v.trim().chars().count() < 3 {
                vendor_name = None;
            }
        }

        debug!(
            lines = lines.len(),
            items = items.len(),
            has_total = total_amount.is_some(),
            has_date = date.is_some(),
            has_vendor = vendor_name.is_some(),
            "parsed receipt text"
        );

        ExtractedBill {
            raw_text: raw_text.to_string(),
            total_amount,
            date,
            vendor_name,
            items,
        }
    }

    fn match_total(&self, line: &str) -> Option<String> {
        for pattern in &self.total_patterns {
            if let Some(caps) = pattern.captures(line) {
                if let Some(value) = caps.get(1) {
                    return Some(normalize_decimal(value.as_str()));
                }
            }
        }
        None
    }

    fn match_date(&self, line: &str) -> Option<String> {
        for pattern in &self.date_patterns {
            if let Some(caps) = pattern.captures(line) {
                if let Some(value) = caps.get(1) {
                    // Stored verbatim, in whatever format it was found
                    return Some(value.as_str().to_string());
                }
            }
        }
        None
    }

    /// Check whether a header line qualifies as a vendor name and clean it
    ///
    /// Cleaning strips every character outside letters, digits, `&`, `.`,
    /// `-`, and whitespace, then collapses runs of whitespace. A cleaned name
    /// shorter than 3 characters is treated as no match.
    fn match_vendor(&self, line: &str) -> Option<String> {
        let len = line.chars().count();
        if len <= 3 || len >= 80 {
            return None;
        }

        let upper = line.to_uppercase();
        if VENDOR_EXCLUSIONS.iter().any(|word| upper.contains(word)) {
            return None;
        }

        let first = line.chars().next()?;
        if first.is_ascii_digit() || first == '$' {
            return None;
        }

        let stripped = self.vendor_strip.replace_all(line, " ");
        let cleaned = self.whitespace.replace_all(&stripped, " ").trim().to_string();

        if cleaned.chars().count() < 3 {
            None
        } else {
            Some(cleaned)
        }
    }

    fn match_item(&self, line: &str) -> Option<LineItem> {
        for (kind, pattern) in &self.item_patterns {
            if let Some(caps) = pattern.captures(line) {
                let item = match kind {
                    ItemRowKind::Full => LineItem {
                        description: caps[1].trim().to_string(),
                        quantity: Some(caps[2].to_string()),
                        unit_price: Some(normalize_decimal(&caps[3])),
                        amount: Some(normalize_decimal(&caps[4])),
                    },
                    ItemRowKind::Simple => LineItem {
                        description: caps[1].trim().to_string(),
                        quantity: None,
                        unit_price: None,
                        amount: Some(normalize_decimal(&caps[2])),
                    },
                    ItemRowKind::Multiplier => LineItem {
                        description: caps[2].trim().to_string(),
                        quantity: Some(caps[1].to_string()),
                        unit_price: None,
                        amount: Some(normalize_decimal(&caps[3])),
                    },
                };
                return Some(item);
            }
        }
        None
    }
}

/// Normalize a captured numeral by rewriting the first comma to a dot
///
/// Only the first comma is replaced. "1,234.56" therefore becomes
/// "1.234.56"; this matches historical behavior and is kept so stored
/// values stay consistent.
fn normalize_decimal(value: &str) -> String {
    value.replacen(',', ".", 1)
}
