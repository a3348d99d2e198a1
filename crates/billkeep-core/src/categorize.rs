//! Rule-based spending categorization
//!
//! Maps free text (plus optional vendor/product hints) to one of a fixed
//! closed set of categories using weighted keyword and vendor substring
//! matching. Vendor hits weigh 10, keyword hits 5; the score is normalized
//! against the size of each category's rule lists. Anything scoring under
//! the confidence floor falls back to `Other`.
//!
//! The rule table is an explicitly ordered sequence: ties between equally
//! confident categories resolve to the one declared earlier.

use tracing::debug;

use crate::models::{Category, CategoryMatch};

/// Score added for each matching vendor string
const VENDOR_WEIGHT: u32 = 10;

/// Score added for each matching keyword
const KEYWORD_WEIGHT: u32 = 5;

/// Matches below this confidence are discarded in favor of `Other`
const CONFIDENCE_FLOOR: u8 = 30;

/// Static rules for one category: keywords, known vendors, and candidate
/// subcategories in resolution order
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
    pub vendors: &'static [&'static str],
    pub subcategories: &'static [&'static str],
}

/// Weighted keyword/vendor categorizer over a fixed, ordered rule table
///
/// Built once at startup and shared; `categorize` is a pure function of its
/// inputs and safe to call concurrently.
pub struct Categorizer {
    rules: Vec<CategoryRule>,
}

impl Categorizer {
    pub fn new() -> Self {
        Self { rules: rule_table() }
    }

    /// Categorize free text with optional vendor and product hints
    ///
    /// Never fails: when nothing matches (or the best match stays under the
    /// confidence floor) the result is `Other` with confidence 100.
    pub fn categorize(
        &self,
        text: &str,
        vendor_name: Option<&str>,
        product_name: Option<&str>,
    ) -> CategoryMatch {
        let normalized_vendor = vendor_name.unwrap_or_default().to_lowercase();
        let normalized_product = product_name.unwrap_or_default().to_lowercase();
        let corpus = format!(
            "{} {} {}",
            text.to_lowercase(),
            normalized_vendor,
            normalized_product
        );

        let mut best = CategoryMatch {
            category: Category::Other,
            confidence: 0,
            subcategory: None,
        };

        for rule in &self.rules {
            let mut score: u32 = 0;
            let mut matches: u32 = 0;

            // Vendor hits weigh double; every matching vendor string counts
            for vendor in rule.vendors {
                if normalized_vendor.contains(vendor) || corpus.contains(vendor) {
                    score += VENDOR_WEIGHT;
                    matches += 1;
                }
            }

            for keyword in rule.keywords {
                if corpus.contains(keyword) {
                    score += KEYWORD_WEIGHT;
                    matches += 1;
                }
            }

            let rule_size = (rule.keywords.len() + rule.vendors.len()).max(1);
            let confidence =
                (100.0 * score as f64 / rule_size as f64).min(100.0).round() as u8;

            debug!(
                category = rule.category.as_str(),
                score, matches, confidence, "scored category"
            );

            // Strict greater-than keeps the earlier category on ties
            if confidence > best.confidence && matches > 0 {
                best = CategoryMatch {
                    category: rule.category,
                    confidence,
                    subcategory: resolve_subcategory(&corpus, rule.subcategories),
                };
            }
        }

        if best.confidence < CONFIDENCE_FLOOR {
            best = CategoryMatch {
                category: Category::Other,
                confidence: 100,
                subcategory: None,
            };
        }

        debug!(
            category = best.category.as_str(),
            confidence = best.confidence,
            "categorized text"
        );

        best
    }

    /// All category names, in rule-table order
    pub fn categories(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.category.as_str()).collect()
    }

    /// Candidate subcategories for a category, in resolution order
    pub fn subcategories_for(&self, category: Category) -> &'static [&'static str] {
        self.rules
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.subcategories)
            .unwrap_or(&[])
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the first subcategory whose keywords appear in the corpus
///
/// Falls back to the first declared subcategory when nothing matches;
/// categories with no subcategories yield `None`.
fn resolve_subcategory(corpus: &str, subcategories: &'static [&'static str]) -> Option<String> {
    for subcategory in subcategories {
        for keyword in subcategory_keywords(subcategory) {
            if corpus.contains(keyword) {
                return Some((*subcategory).to_string());
            }
        }
    }
    subcategories.first().map(|s| (*s).to_string())
}

/// Global subcategory keyword table, shared across categories
///
/// Subcategories without an entry here can only be chosen as the default.
fn subcategory_keywords(subcategory: &str) -> &'static [&'static str] {
    match subcategory {
        "Mobile Phones" => &["phone", "smartphone", "iphone", "android", "cell"],
        "Computers" => &["laptop", "computer", "desktop", "pc", "mac"],
        "Audio/Video" => &["headphones", "speaker", "tv", "monitor", "camera"],
        "Accessories" => &["charger", "cable", "case", "screen protector"],
        "Furniture" => &["sofa", "chair", "table", "bed", "mattress"],
        "Tools" => &["drill", "hammer", "screwdriver", "saw"],
        "Kitchen" => &["kitchen", "cooking", "utensil", "pot", "pan"],
        "Clothing" => &["shirt", "pants", "dress", "jacket"],
        "Shoes" => &["shoes", "sneakers", "boots", "sandals"],
        "Groceries" => &["grocery", "food", "produce", "dairy"],
        "Restaurants" => &["restaurant", "dining", "takeout", "delivery"],
        "Fuel" => &["gas", "fuel", "gasoline", "diesel"],
        "Maintenance" => &["oil change", "service", "maintenance", "inspection"],
        _ => &[],
    }
}

/// The fixed category rule table, in tie-break order
fn rule_table() -> Vec<CategoryRule> {
    vec![
        CategoryRule {
            category: Category::Electronics,
            keywords: &[
                "phone", "laptop", "computer", "tablet", "headphones", "speaker", "camera", "tv",
                "monitor", "keyboard", "mouse", "charger", "cable", "electronics", "gadget",
                "smartphone", "iphone", "android", "macbook", "ipad",
            ],
            vendors: &[
                "apple", "samsung", "sony", "lg", "dell", "hp", "lenovo", "asus", "microsoft",
                "google", "amazon", "best buy", "circuit city", "fry's",
            ],
            subcategories: &["Mobile Phones", "Computers", "Audio/Video", "Accessories"],
        },
        CategoryRule {
            category: Category::HomeGarden,
            keywords: &[
                "furniture", "sofa", "chair", "table", "bed", "mattress", "lamp", "garden",
                "plant", "tools", "drill", "hammer", "paint", "brush", "home improvement",
                "decor", "curtain", "rug", "kitchen", "appliance",
            ],
            vendors: &[
                "ikea", "home depot", "lowes", "wayfair", "bed bath beyond", "target", "walmart",
            ],
            subcategories: &["Furniture", "Tools", "Decor", "Kitchen", "Garden"],
        },
        CategoryRule {
            category: Category::ClothingAccessories,
            keywords: &[
                "shirt", "pants", "dress", "shoes", "jacket", "coat", "hat", "bag", "wallet",
                "watch", "jewelry", "clothing", "apparel", "fashion", "sneakers", "boots",
                "jeans", "sweater",
            ],
            vendors: &[
                "nike", "adidas", "zara", "h&m", "uniqlo", "gap", "old navy", "macy's",
                "nordstrom", "amazon fashion",
            ],
            subcategories: &["Clothing", "Shoes", "Accessories", "Jewelry"],
        },
        CategoryRule {
            category: Category::FoodBeverages,
            keywords: &[
                "grocery", "food", "restaurant", "coffee", "tea", "juice", "water", "snack",
                "meal", "dining", "lunch", "dinner", "breakfast", "pizza", "burger", "sandwich",
            ],
            vendors: &[
                "starbucks", "mcdonalds", "subway", "walmart", "target", "whole foods", "kroger",
                "safeway", "costco", "trader joe's",
            ],
            subcategories: &["Groceries", "Restaurants", "Beverages", "Snacks"],
        },
        CategoryRule {
            category: Category::HealthBeauty,
            keywords: &[
                "pharmacy", "medicine", "prescription", "vitamin", "supplement", "cosmetics",
                "skincare", "shampoo", "toothpaste", "soap", "perfume", "makeup", "health",
                "beauty", "personal care",
            ],
            vendors: &["cvs", "walgreens", "rite aid", "sephora", "ulta", "pharmacy"],
            subcategories: &["Pharmacy", "Cosmetics", "Personal Care", "Health Supplements"],
        },
        CategoryRule {
            category: Category::Automotive,
            keywords: &[
                "car", "auto", "vehicle", "gas", "fuel", "oil", "tire", "battery", "repair",
                "maintenance", "service", "parts", "automotive",
            ],
            vendors: &[
                "shell", "exxon", "chevron", "bp", "mobil", "jiffy lube", "valvoline",
                "autozone", "advance auto",
            ],
            subcategories: &["Fuel", "Maintenance", "Parts", "Repairs"],
        },
        CategoryRule {
            category: Category::BooksMedia,
            keywords: &[
                "book", "magazine", "newspaper", "movie", "dvd", "cd", "music", "game",
                "software", "subscription", "streaming",
            ],
            vendors: &[
                "amazon", "barnes noble", "netflix", "spotify", "steam", "apple music",
                "google play",
            ],
            subcategories: &["Books", "Movies", "Music", "Games", "Subscriptions"],
        },
        CategoryRule {
            category: Category::Services,
            keywords: &[
                "service", "repair", "maintenance", "cleaning", "consultation", "professional",
                "labor", "installation", "support",
            ],
            vendors: &[],
            subcategories: &[
                "Professional Services",
                "Repairs",
                "Maintenance",
                "Consultation",
            ],
        },
        // Guaranteed fallback: no rules, never scores
        CategoryRule {
            category: Category::Other,
            keywords: &[],
            vendors: &[],
            subcategories: &[],
        },
    ]
}
