//! CLI command implementations

mod categorize;
mod parse;
mod scan;

pub use categorize::{cmd_categories, cmd_categorize};
pub use parse::cmd_parse;
pub use scan::cmd_scan;

use billkeep_core::ExtractedBill;

/// Print an extracted bill in human-readable form
pub(crate) fn print_bill(bill: &ExtractedBill) {
    println!("  Vendor: {}", bill.vendor_name.as_deref().unwrap_or("Unknown"));
    println!("  Date:   {}", bill.date.as_deref().unwrap_or("N/A"));
    println!("  Total:  {}", bill.total_amount.as_deref().unwrap_or("N/A"));

    if bill.items.is_empty() {
        println!("  Items:  none detected");
        return;
    }

    println!("  Items:");
    for item in &bill.items {
        let qty = item
            .quantity
            .as_deref()
            .map(|q| format!("{}x ", q))
            .unwrap_or_default();
        let amount = item.amount.as_deref().unwrap_or("?");
        println!("    {}{} - {}", qty, item.description, amount);
    }
}
