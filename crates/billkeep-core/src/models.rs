//! Domain models for Billkeep

use serde::{Deserialize, Serialize};

/// Structured data extracted from a receipt image's OCR text
///
/// Every field except `raw_text` is best-effort: a field that could not be
/// matched is simply left unset. Numeric fields are kept as strings exactly
/// as they appeared (with comma decimal separators normalized to dots); no
/// numeric parsing or validation happens at extraction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedBill {
    /// Original unmodified OCR output
    pub raw_text: String,
    /// First matched total/balance amount, dot-decimal formatted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<String>,
    /// First date-like substring, verbatim (no format normalization)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Cleaned vendor name from the receipt header lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    /// Line items in order of appearance
    pub items: Vec<LineItem>,
}

/// A single purchased item parsed from a receipt row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

/// Spending categories
///
/// A fixed closed set. `Other` carries no keywords or vendors and exists
/// purely as the guaranteed fallback. The serialized names must stay stable:
/// they are what gets stored on bill records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    #[serde(rename = "Home & Garden")]
    HomeGarden,
    #[serde(rename = "Clothing & Accessories")]
    ClothingAccessories,
    #[serde(rename = "Food & Beverages")]
    FoodBeverages,
    #[serde(rename = "Health & Beauty")]
    HealthBeauty,
    Automotive,
    #[serde(rename = "Books & Media")]
    BooksMedia,
    Services,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::HomeGarden => "Home & Garden",
            Self::ClothingAccessories => "Clothing & Accessories",
            Self::FoodBeverages => "Food & Beverages",
            Self::HealthBeauty => "Health & Beauty",
            Self::Automotive => "Automotive",
            Self::BooksMedia => "Books & Media",
            Self::Services => "Services",
            Self::Other => "Other",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Electronics" => Ok(Self::Electronics),
            "Home & Garden" => Ok(Self::HomeGarden),
            "Clothing & Accessories" => Ok(Self::ClothingAccessories),
            "Food & Beverages" => Ok(Self::FoodBeverages),
            "Health & Beauty" => Ok(Self::HealthBeauty),
            "Automotive" => Ok(Self::Automotive),
            "Books & Media" => Ok(Self::BooksMedia),
            "Services" => Ok(Self::Services),
            "Other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of categorizing free text against the category rule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub category: Category,
    /// Heuristic 0-100 score, not a statistical probability
    pub confidence: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for name in [
            "Electronics",
            "Home & Garden",
            "Clothing & Accessories",
            "Food & Beverages",
            "Health & Beauty",
            "Automotive",
            "Books & Media",
            "Services",
            "Other",
        ] {
            let cat: Category = name.parse().unwrap();
            assert_eq!(cat.as_str(), name);
        }
        assert!("Groceries".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_uses_display_names() {
        let json = serde_json::to_string(&Category::HomeGarden).unwrap();
        assert_eq!(json, "\"Home & Garden\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::HomeGarden);
    }

    #[test]
    fn test_extracted_bill_serializes_camel_case() {
        let bill = ExtractedBill {
            raw_text: "Total 5.00".to_string(),
            total_amount: Some("5.00".to_string()),
            date: None,
            vendor_name: None,
            items: vec![],
        };
        let json = serde_json::to_value(&bill).unwrap();
        assert_eq!(json["rawText"], "Total 5.00");
        assert_eq!(json["totalAmount"], "5.00");
        assert!(json.get("vendorName").is_none());
    }
}
