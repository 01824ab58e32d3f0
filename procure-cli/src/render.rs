//! Plain-text tables for list pages.

use procure_model::{Proposal, PurchaseOrder};
use procure_sort::Page;
use std::fmt;

const TITLE_WIDTH: usize = 32;
const VENDOR_WIDTH: usize = 20;

/// A page of proposals rendered as a table.
pub struct ProposalTable<'p, 'a>(pub &'p Page<'a, Proposal>);

/// A page of purchase orders rendered as a table.
pub struct OrderTable<'p, 'a>(pub &'p Page<'a, PurchaseOrder>);

impl fmt::Display for ProposalTable<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.0;
        if page.total == 0 {
            return writeln!(f, "No proposals.");
        }
        writeln!(
            f,
            "{:>6}  {:<TITLE_WIDTH$}  {:<VENDOR_WIDTH$}  {:>12}  {:<9}  CREATED",
            "ID", "TITLE", "VENDOR", "TOTAL", "STATUS"
        )?;
        for proposal in &page.rows {
            writeln!(
                f,
                "{:>6}  {:<TITLE_WIDTH$}  {:<VENDOR_WIDTH$}  {:>12.2}  {:<9}  {}",
                proposal.id.get(),
                clip(&proposal.title, TITLE_WIDTH),
                clip(&proposal.vendor, VENDOR_WIDTH),
                proposal.total_cost(),
                proposal.status.as_str(),
                proposal.created_at.format("%Y-%m-%d"),
            )?;
        }
        footer(f, page.page, page.page_count, page.total, "proposals")
    }
}

impl fmt::Display for OrderTable<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.0;
        if page.total == 0 {
            return writeln!(f, "No purchase orders.");
        }
        writeln!(
            f,
            "{:>6}  {:>8}  {:<VENDOR_WIDTH$}  {:>12}  {:<9}  EXPECTED",
            "ID", "PROPOSAL", "VENDOR", "AMOUNT", "STATUS"
        )?;
        for order in &page.rows {
            let expected = order
                .expected_delivery
                .map_or_else(|| "-".to_string(), |date| date.format("%Y-%m-%d").to_string());
            writeln!(
                f,
                "{:>6}  {:>8}  {:<VENDOR_WIDTH$}  {:>12.2}  {:<9}  {}",
                order.id.get(),
                order.proposal_id.get(),
                clip(&order.vendor, VENDOR_WIDTH),
                order.total_amount,
                order.status.as_str(),
                expected,
            )?;
        }
        footer(f, page.page, page.page_count, page.total, "purchase orders")
    }
}

fn footer(f: &mut fmt::Formatter<'_>, page: usize, page_count: usize, total: usize, noun: &str) -> fmt::Result {
    writeln!(f, "Page {}/{} ({} {})", page + 1, page_count.max(1), total, noun)
}

/// Shortens `text` to at most `width` characters.
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}
