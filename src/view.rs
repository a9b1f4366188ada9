//! View model for the presentation layer
//!
//! Everything a renderer needs to draw the filter panel and the product
//! table, derived synchronously from a `Catalog` and a `SelectionState`.
//! Server-side data is never mutated here.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::filter::{filter_products, ProductFilter};
use crate::model::{CategoryId, EnrichedProduct, Sex, UserId};
use crate::selection::SelectionState;
use crate::sort::{sort_products, SortColumn, SortDirection, SortState};

// =============================================================================
// TABLE
// =============================================================================

/// Sort glyph shown next to a column header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn for_column(sort: &SortState, column: SortColumn) -> Self {
        match sort.direction_of(column) {
            SortDirection::Default => SortIndicator::Unsorted,
            SortDirection::Ascending => SortIndicator::Ascending,
            SortDirection::Descending => SortIndicator::Descending,
        }
    }

    /// Font Awesome icon class
    pub fn glyph(&self) -> &'static str {
        match self {
            SortIndicator::Unsorted => "fa-sort",
            SortIndicator::Ascending => "fa-sort-up",
            SortIndicator::Descending => "fa-sort-down",
        }
    }

    /// Plain-text arrow for terminal output
    pub fn arrow(&self) -> &'static str {
        match self {
            SortIndicator::Unsorted => "↕",
            SortIndicator::Ascending => "↑",
            SortIndicator::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnHeader {
    pub column: SortColumn,
    pub label: &'static str,
    pub indicator: SortIndicator,
}

/// Text tone of the user cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowTone {
    /// `has-text-link`
    Link,
    /// `has-text-danger`
    Danger,
}

impl RowTone {
    pub fn for_sex(sex: Sex) -> Self {
        match sex {
            Sex::Male => RowTone::Link,
            Sex::Female => RowTone::Danger,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RowTone::Link => "has-text-link",
            RowTone::Danger => "has-text-danger",
        }
    }
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub user: String,
    pub tone: RowTone,
}

impl From<&EnrichedProduct> for ProductRow {
    fn from(product: &EnrichedProduct) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category_label(),
            user: product.user.name.clone(),
            tone: RowTone::for_sex(product.user.sex),
        }
    }
}

// =============================================================================
// FILTER PANEL
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerTab {
    /// `None` is the "All" tab
    pub owner: Option<UserId>,
    pub label: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryChip {
    pub category: CategoryId,
    pub label: String,
    pub is_selected: bool,
}

// =============================================================================
// VIEW
// =============================================================================

/// Derived view of the catalog for one selection state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    /// Filtered, then sorted products
    pub products: Vec<EnrichedProduct>,
    /// A filter is active and nothing matched
    pub no_results: bool,
    pub columns: Vec<ColumnHeader>,
    pub owner_tabs: Vec<OwnerTab>,
    pub category_chips: Vec<CategoryChip>,
    /// "All" category chip is outlined while any category is selected
    pub all_categories_outlined: bool,
    /// The search field's clear button is shown
    pub clear_query_visible: bool,
}

impl CatalogView {
    pub fn derive(catalog: &Catalog, selection: &SelectionState) -> Self {
        let filter = ProductFilter::from_selection(selection);
        let filtered = filter_products(catalog.products(), &filter);
        let products = sort_products(&filtered, selection.sort);
        let no_results = filter.is_active() && products.is_empty();

        let columns = SortColumn::ALL
            .iter()
            .map(|&column| ColumnHeader {
                column,
                label: column.label(),
                indicator: SortIndicator::for_column(&selection.sort, column),
            })
            .collect();

        let owner_tabs = std::iter::once(OwnerTab {
            owner: None,
            label: "All".to_string(),
            is_active: selection.is_owner_active(None),
        })
        .chain(catalog.users().iter().map(|user| OwnerTab {
            owner: Some(user.id),
            label: user.name.clone(),
            is_active: selection.is_owner_active(Some(user.id)),
        }))
        .collect();

        let category_chips = catalog
            .categories()
            .iter()
            .map(|category| CategoryChip {
                category: category.id,
                label: category.title.clone(),
                is_selected: selection.is_category_selected(category.id),
            })
            .collect();

        Self {
            products,
            no_results,
            columns,
            owner_tabs,
            category_chips,
            all_categories_outlined: !selection.categories.is_empty(),
            clear_query_visible: !selection.query.is_empty(),
        }
    }

    pub fn rows(&self) -> Vec<ProductRow> {
        self.products.iter().map(ProductRow::from).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
