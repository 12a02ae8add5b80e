//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is information-centric: the primary display for every product is
//! its semantic identity — positional index, name, status — with wire-level
//! detail (slug, prices, category) as indented context lines underneath.
//!
//! ```text
//! Products
//! 001 Phone X (active)
//!     Category: mobile
//!     Price: $599.99 → $449.99 (25% OFF)
//!     Slug: phone-x
//!
//! Stats
//!     Total: 3  Active: 2  Draft: 1  Inactive: 0
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::catalog::{CatalogView, StatusCounts, discount_percent};
use crate::gallery::EMPTY_GALLERY_NOTICE;
use crate::types::Product;
use crate::validate::{FieldError, PasswordChecks, StrengthLabel};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Product header plus context lines.
fn product_lines(index: usize, product: &Product) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {} ({})",
        format_index(index),
        product.product_name,
        product.status.as_str()
    )];
    lines.push(format!("    Category: {}", product.category));
    lines.push(format!("    Price: {}", price_display(product)));
    lines.push(format!("    Slug: {}", product.product_url));
    if product.gallery.is_empty() {
        lines.push(format!("    Gallery: {EMPTY_GALLERY_NOTICE}"));
    } else {
        lines.push(format!("    Gallery: {} images", product.gallery.len()));
    }
    lines
}

/// `$599.99`, or `$599.99 → $449.99 (25% OFF)` when discounted.
fn price_display(product: &Product) -> String {
    match (product.discounted_price, discount_percent(product)) {
        (Some(discounted), Some(percent)) => format!(
            "${:.2} → ${:.2} ({}% OFF)",
            product.price, discounted, percent
        ),
        (Some(discounted), None) => format!("${:.2} → ${:.2}", product.price, discounted),
        _ => format!("${:.2}", product.price),
    }
}

// ============================================================================
// Filter command
// ============================================================================

pub fn format_catalog(view: &CatalogView) -> Vec<String> {
    let mut lines = vec!["Products".to_string()];
    if view.visible.is_empty() {
        lines.push("    No products found".to_string());
    }
    for (pos, product) in view.visible.iter().enumerate() {
        lines.extend(product_lines(pos + 1, product));
    }
    lines.push(String::new());
    lines.extend(format_stats(&view.stats));
    lines
}

pub fn format_stats(stats: &StatusCounts) -> Vec<String> {
    vec![
        "Stats".to_string(),
        format!(
            "    Total: {}  Active: {}  Draft: {}  Inactive: {}",
            stats.total, stats.active, stats.draft, stats.inactive
        ),
    ]
}

pub fn print_catalog(view: &CatalogView) {
    for line in format_catalog(view) {
        println!("{line}");
    }
}

// ============================================================================
// Check command
// ============================================================================

/// Per-product findings report. Clean products get a single `ok` line.
pub fn format_check(report: &[(&Product, Vec<FieldError>)]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut total_findings = 0;
    for (pos, (product, findings)) in report.iter().enumerate() {
        lines.push(format!(
            "{} {}",
            format_index(pos + 1),
            product.product_name
        ));
        if findings.is_empty() {
            lines.push("    ok".to_string());
        }
        for finding in findings {
            total_findings += 1;
            lines.push(format!("    problem: {finding}"));
        }
    }
    lines.push(String::new());
    lines.push(format!(
        "Checked {} products, {} problems",
        report.len(),
        total_findings
    ));
    lines
}

pub fn print_check(report: &[(&Product, Vec<FieldError>)]) {
    for line in format_check(report) {
        println!("{line}");
    }
}

// ============================================================================
// Strength command
// ============================================================================

pub fn format_strength(checks: PasswordChecks) -> Vec<String> {
    let score = checks.score();
    let mut lines = vec![format!(
        "Score: {}/5 ({})",
        score,
        StrengthLabel::from_score(score).label()
    )];
    for (label, met) in checks.items() {
        let mark = if met { "x" } else { " " };
        lines.push(format!("    [{mark}] {label}"));
    }
    lines
}

pub fn print_strength(checks: PasswordChecks) {
    for line in format_strength(checks) {
        println!("{line}");
    }
}
