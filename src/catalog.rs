//! Catalog filtering and dashboard aggregation.
//!
//! The dashboard holds the full fetched collection and re-derives its view
//! from scratch whenever the collection or the criteria change. At catalog
//! scale there is nothing to index incrementally; a single pass per change is
//! simpler and always consistent.
//!
//! Three derivations come out of one collection:
//!
//! - **Visible list**: products matching all active criteria (AND).
//! - **Status counters**: computed over the *full* collection, so the stat
//!   cards keep showing catalog totals while filters narrow the list.
//! - **Category options**: distinct categories observed in the last fetch,
//!   independent of criteria, so the selector never shrinks as filters bite.

use crate::types::{Product, Status};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Active filter combination. All three criteria AND together; the empty
/// criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the product name.
    /// Empty matches all.
    pub search_term: String,
    pub status: Option<Status>,
    pub category: Option<String>,
}

impl FilterCriteria {
    pub fn matches(&self, product: &Product) -> bool {
        let name_ok = self.search_term.is_empty()
            || product
                .product_name
                .to_lowercase()
                .contains(&self.search_term.to_lowercase());
        let status_ok = self.status.is_none_or(|s| product.status == s);
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|c| product.category == c);
        name_ok && status_ok && category_ok
    }
}

/// Dashboard stat-card counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub active: usize,
    pub draft: usize,
    pub inactive: usize,
}

impl StatusCounts {
    pub fn of(products: &[Product]) -> Self {
        let mut counts = StatusCounts {
            total: products.len(),
            ..StatusCounts::default()
        };
        for p in products {
            match p.status {
                Status::Active => counts.active += 1,
                Status::Draft => counts.draft += 1,
                Status::Inactive => counts.inactive += 1,
            }
        }
        counts
    }
}

/// The derived dashboard view: what to list, and the counters.
#[derive(Debug)]
pub struct CatalogView<'a> {
    pub visible: Vec<&'a Product>,
    /// Over the full collection, not over `visible`.
    pub stats: StatusCounts,
}

/// Reduce the full collection plus criteria into the display view.
pub fn apply<'a>(products: &'a [Product], criteria: &FilterCriteria) -> CatalogView<'a> {
    CatalogView {
        visible: products.iter().filter(|p| criteria.matches(p)).collect(),
        stats: StatusCounts::of(products),
    }
}

/// Distinct categories in first-observed order, from the full collection.
pub fn category_options(products: &[Product]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for p in products {
        if !options.contains(&p.category) {
            options.push(p.category.clone());
        }
    }
    options
}

/// Percentage for the "N% OFF" badge, rounded half-up to the nearest integer.
///
/// Defined only when a discounted price exists and sits strictly below the
/// base price; a product without a real discount gets no badge.
pub fn discount_percent(product: &Product) -> Option<u32> {
    let discounted = product.discounted_price?;
    if product.price <= Decimal::ZERO || discounted >= product.price {
        return None;
    }
    let pct = (product.price - discounted) / product.price * Decimal::from(100);
    pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
}

/// The price a buyer actually pays: discounted when present, base otherwise.
pub fn final_price(product: &Product) -> Decimal {
    product.discounted_price.unwrap_or(product.price)
}

/// Selector label for a raw category or status value: first letter uppercased.
pub fn option_label(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Image;

    fn product(name: &str, status: Status, category: &str) -> Product {
        Product {
            id: None,
            product_name: name.to_string(),
            product_url: name.to_lowercase().replace(' ', "-"),
            meta_title: name.to_string(),
            price: Decimal::from(100),
            discounted_price: None,
            category: category.to_string(),
            status,
            main_image: Image::new("https://x.test/main.jpg"),
            gallery: vec![Image::new("https://x.test/main.jpg")],
            description: String::new(),
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product("Phone X", Status::Active, "mobile"),
            product("Phone Y", Status::Draft, "mobile"),
            product("Tablet", Status::Active, "electronics"),
        ]
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    #[test]
    fn empty_criteria_match_all() {
        let products = sample();
        let view = apply(&products, &FilterCriteria::default());
        assert_eq!(view.visible.len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let products = sample();
        let view = apply(
            &products,
            &FilterCriteria {
                search_term: "PHONE".to_string(),
                ..FilterCriteria::default()
            },
        );
        let names: Vec<&str> = view.visible.iter().map(|p| p.product_name.as_str()).collect();
        assert_eq!(names, vec!["Phone X", "Phone Y"]);
    }

    #[test]
    fn search_and_status_combine() {
        let products = sample();
        let view = apply(
            &products,
            &FilterCriteria {
                search_term: "phone".to_string(),
                status: Some(Status::Active),
                category: None,
            },
        );
        let names: Vec<&str> = view.visible.iter().map(|p| p.product_name.as_str()).collect();
        assert_eq!(names, vec!["Phone X"]);
    }

    #[test]
    fn criteria_are_order_independent() {
        // Applying criteria one at a time, in any order, narrows to the same
        // set as applying them all at once.
        let products = sample();
        let combined = FilterCriteria {
            search_term: "phone".to_string(),
            status: Some(Status::Active),
            category: Some("mobile".to_string()),
        };
        let all_at_once: Vec<&str> = apply(&products, &combined)
            .visible
            .iter()
            .map(|p| p.product_name.as_str())
            .collect();

        let single_criteria = [
            FilterCriteria {
                search_term: "phone".to_string(),
                ..FilterCriteria::default()
            },
            FilterCriteria {
                status: Some(Status::Active),
                ..FilterCriteria::default()
            },
            FilterCriteria {
                category: Some("mobile".to_string()),
                ..FilterCriteria::default()
            },
        ];
        let orderings: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        for order in orderings {
            let mut remaining: Vec<&Product> = products.iter().collect();
            for idx in order {
                remaining.retain(|p| single_criteria[idx].matches(p));
            }
            let names: Vec<&str> = remaining.iter().map(|p| p.product_name.as_str()).collect();
            assert_eq!(names, all_at_once, "ordering {order:?} diverged");
        }
    }

    // =========================================================================
    // Counters and options
    // =========================================================================

    #[test]
    fn stats_cover_full_collection_regardless_of_filter() {
        let products = sample();
        let view = apply(
            &products,
            &FilterCriteria {
                search_term: "tablet".to_string(),
                ..FilterCriteria::default()
            },
        );
        assert_eq!(view.visible.len(), 1);
        assert_eq!(view.stats.total, 3);
        assert_eq!(view.stats.active, 2);
        assert_eq!(view.stats.draft, 1);
        assert_eq!(view.stats.inactive, 0);
    }

    #[test]
    fn stats_total_is_sum_of_statuses() {
        let products = sample();
        let stats = StatusCounts::of(&products);
        assert_eq!(stats.total, stats.active + stats.draft + stats.inactive);
    }

    #[test]
    fn category_options_distinct_in_first_observed_order() {
        let products = sample();
        assert_eq!(category_options(&products), vec!["mobile", "electronics"]);
    }

    #[test]
    fn category_options_ignore_criteria() {
        // Options come from the full collection; the caller never passes a
        // filtered list here.
        let products = sample();
        let view = apply(
            &products,
            &FilterCriteria {
                category: Some("mobile".to_string()),
                ..FilterCriteria::default()
            },
        );
        assert_eq!(view.visible.len(), 2);
        assert_eq!(category_options(&products).len(), 2);
    }

    // =========================================================================
    // Price derivations
    // =========================================================================

    #[test]
    fn discount_badge_for_quarter_off() {
        let mut p = product("Phone X", Status::Active, "mobile");
        p.discounted_price = Some(Decimal::from(75));
        assert_eq!(discount_percent(&p), Some(25));
    }

    #[test]
    fn no_discount_no_badge() {
        let p = product("Phone X", Status::Active, "mobile");
        assert_eq!(discount_percent(&p), None);
    }

    #[test]
    fn discount_equal_to_price_gets_no_badge() {
        let mut p = product("Phone X", Status::Active, "mobile");
        p.discounted_price = Some(p.price);
        assert_eq!(discount_percent(&p), None);
    }

    #[test]
    fn discount_rounds_half_up_everywhere() {
        // 100 → 37.50 is 62.5% off; the single uniform rule rounds up to 63.
        let mut p = product("Phone X", Status::Active, "mobile");
        p.discounted_price = Some(Decimal::new(3750, 2));
        assert_eq!(discount_percent(&p), Some(63));

        // One third off rounds down to 33.
        p.price = Decimal::from(3);
        p.discounted_price = Some(Decimal::from(2));
        assert_eq!(discount_percent(&p), Some(33));
    }

    #[test]
    fn final_price_prefers_discount() {
        let mut p = product("Phone X", Status::Active, "mobile");
        assert_eq!(final_price(&p), Decimal::from(100));
        p.discounted_price = Some(Decimal::from(75));
        assert_eq!(final_price(&p), Decimal::from(75));
    }

    #[test]
    fn option_label_uppercases_first_letter() {
        assert_eq!(option_label("mobile"), "Mobile");
        assert_eq!(option_label(""), "");
    }
}
