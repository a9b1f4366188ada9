//! Filter engine
//!
//! Three independent predicates combined with AND. Each one is a no-op while
//! its parameter is unset:
//! - text: trimmed query is empty
//! - owner: no owner selected ("all users")
//! - category: empty category selection ("all categories")

use std::collections::BTreeSet;
use tracing::debug;

use crate::model::{CategoryId, EnrichedProduct, UserId};
use crate::normalize::fold;
use crate::selection::SelectionState;

/// Filter parameters for one derivation of the product list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Folded query; empty means the text filter is inactive
    needle: String,
    pub owner: Option<UserId>,
    pub categories: BTreeSet<CategoryId>,
}

impl ProductFilter {
    pub fn new(
        query: &str,
        owner: Option<UserId>,
        categories: impl IntoIterator<Item = CategoryId>,
    ) -> Self {
        Self {
            needle: fold(query),
            owner,
            categories: categories.into_iter().collect(),
        }
    }

    pub fn from_selection(selection: &SelectionState) -> Self {
        Self {
            needle: fold(&selection.query),
            owner: selection.owner,
            categories: selection.categories.clone(),
        }
    }

    /// Whether any of the three predicates restricts the result
    pub fn is_active(&self) -> bool {
        !self.needle.is_empty() || self.owner.is_some() || !self.categories.is_empty()
    }

    /// Check a single product against all active predicates
    pub fn matches(&self, product: &EnrichedProduct) -> bool {
        self.matches_text(product) && self.matches_owner(product) && self.matches_category(product)
    }

    fn matches_text(&self, product: &EnrichedProduct) -> bool {
        self.needle.is_empty() || fold(&product.name).contains(&self.needle)
    }

    fn matches_owner(&self, product: &EnrichedProduct) -> bool {
        self.owner.map_or(true, |owner| product.user.id == owner)
    }

    fn matches_category(&self, product: &EnrichedProduct) -> bool {
        self.categories.is_empty() || self.categories.contains(&product.category_id)
    }
}

/// Filter products, preserving their relative order.
///
/// Only the shared category/user handles are cloned; the source slice is
/// never modified.
pub fn filter_products(
    products: &[EnrichedProduct],
    filter: &ProductFilter,
) -> Vec<EnrichedProduct> {
    let filtered: Vec<EnrichedProduct> = products
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect();

    debug!(
        "Filtered {} of {} products (active: {})",
        filtered.len(),
        products.len(),
        filter.is_active()
    );

    filtered
}
