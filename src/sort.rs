//! Sort engine
//!
//! `sort_products` is a pure function of `(column, direction)`. The click
//! cycle that moves a column through its directions lives on `SortState`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::model::EnrichedProduct;
use crate::normalize::collate;

/// Sortable table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Id,
    Product,
    Category,
    User,
}

impl SortColumn {
    /// All columns in table order
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Id,
        SortColumn::Product,
        SortColumn::Category,
        SortColumn::User,
    ];

    /// Header label
    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::Product => "Product",
            SortColumn::Category => "Category",
            SortColumn::User => "User",
        }
    }

    /// Ascending comparator for this column
    pub fn compare(&self, a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
        match self {
            SortColumn::Id => a.id.cmp(&b.id),
            SortColumn::Product => collate(&a.name, &b.name),
            SortColumn::Category => collate(&a.category.title, &b.category.title),
            SortColumn::User => collate(&a.user.name, &b.user.name),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortColumn::Id => "id",
            SortColumn::Product => "product",
            SortColumn::Category => "category",
            SortColumn::User => "user",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortColumn::Id),
            "product" | "name" => Ok(SortColumn::Product),
            "category" => Ok(SortColumn::Category),
            "user" | "owner" => Ok(SortColumn::User),
            other => Err(format!(
                "unknown sort column '{}' (expected id, product, category or user)",
                other
            )),
        }
    }
}

/// Tri-state sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Source order
    #[default]
    Default,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Next direction when the active column is clicked again
    pub fn next(self) -> Self {
        match self {
            SortDirection::Default => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Default,
        }
    }
}

/// Active sort column and its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self {
            column: Some(column),
            direction,
        }
    }

    /// Apply a click on a column's sort control.
    ///
    /// A different column starts at ascending; the active column advances
    /// default -> ascending -> descending -> default.
    pub fn click(self, column: SortColumn) -> Self {
        if self.column == Some(column) {
            Self {
                column: self.column,
                direction: self.direction.next(),
            }
        } else {
            Self::new(column, SortDirection::Ascending)
        }
    }

    /// Direction shown for `column`; inactive columns are always `Default`
    pub fn direction_of(&self, column: SortColumn) -> SortDirection {
        if self.column == Some(column) {
            self.direction
        } else {
            SortDirection::Default
        }
    }

    /// Whether this state reorders anything
    pub fn is_sorted(&self) -> bool {
        self.column.is_some() && self.direction != SortDirection::Default
    }
}

/// Order products by `state`, returning a new list.
///
/// With no column or `Default` direction the input order is returned as is.
/// Ascending uses a stable sort; descending is the exact reverse of the
/// ascending result, so ties also appear reversed.
pub fn sort_products(products: &[EnrichedProduct], state: SortState) -> Vec<EnrichedProduct> {
    let mut sorted = products.to_vec();

    let column = match (state.column, state.direction) {
        (Some(column), SortDirection::Ascending | SortDirection::Descending) => column,
        _ => return sorted,
    };

    sorted.sort_by(|a, b| column.compare(a, b));

    if state.direction == SortDirection::Descending {
        sorted.reverse();
    }

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Sex, User};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn product(id: u32, name: &str, category: &str, user: &str) -> EnrichedProduct {
        EnrichedProduct {
            id,
            name: name.to_string(),
            category_id: id * 10,
            category: Arc::new(Category {
                id: id * 10,
                title: category.to_string(),
                icon: "📦".to_string(),
                owner_id: id * 100,
            }),
            user: Arc::new(User {
                id: id * 100,
                name: user.to_string(),
                sex: Sex::Female,
            }),
        }
    }

    fn products() -> Vec<EnrichedProduct> {
        vec![
            product(3, "milk", "Drinks", "Roma"),
            product(1, "Bread", "Grocery", "anna"),
            product(4, "Apples", "Fruits", "Anna"),
            product(2, "Eggs", "Grocery", "Max"),
        ]
    }

    fn ids(products: &[EnrichedProduct]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_direction_passes_through() {
        let input = products();
        for column in SortColumn::ALL {
            let state = SortState::new(column, SortDirection::Default);
            assert_eq!(ids(&sort_products(&input, state)), vec![3, 1, 4, 2]);
        }
        assert_eq!(
            ids(&sort_products(&input, SortState::default())),
            vec![3, 1, 4, 2]
        );
    }

    #[test]
    fn test_sort_by_id() {
        let state = SortState::new(SortColumn::Id, SortDirection::Ascending);
        assert_eq!(ids(&sort_products(&products(), state)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sort_by_product_name_ignores_case() {
        let state = SortState::new(SortColumn::Product, SortDirection::Ascending);
        // Apples, Bread, Eggs, milk
        assert_eq!(ids(&sort_products(&products(), state)), vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_sort_by_category_is_stable() {
        let state = SortState::new(SortColumn::Category, SortDirection::Ascending);
        // Drinks, Fruits, Grocery(1), Grocery(2) in input order
        assert_eq!(ids(&sort_products(&products(), state)), vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_descending_reverses_ties() {
        let state = SortState::new(SortColumn::Category, SortDirection::Descending);
        assert_eq!(ids(&sort_products(&products(), state)), vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_sort_by_user() {
        let state = SortState::new(SortColumn::User, SortDirection::Ascending);
        // anna < Anna (lowercase first), Max, Roma
        assert_eq!(ids(&sort_products(&products(), state)), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let input = products();
        let state = SortState::new(SortColumn::Id, SortDirection::Descending);
        let _ = sort_products(&input, state);
        assert_eq!(ids(&input), vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_click_cycle_on_same_column() {
        let state = SortState::default().click(SortColumn::Id);
        assert_eq!(state, SortState::new(SortColumn::Id, SortDirection::Ascending));

        let state = state.click(SortColumn::Id);
        assert_eq!(state.direction, SortDirection::Descending);

        let state = state.click(SortColumn::Id);
        assert_eq!(state.direction, SortDirection::Default);
        assert_eq!(state.column, Some(SortColumn::Id));

        let state = state.click(SortColumn::Id);
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_click_other_column_lands_on_ascending() {
        let state =
            SortState::new(SortColumn::Id, SortDirection::Descending).click(SortColumn::User);
        assert_eq!(state, SortState::new(SortColumn::User, SortDirection::Ascending));

        let state =
            SortState::new(SortColumn::Id, SortDirection::Default).click(SortColumn::Product);
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_direction_of_inactive_column() {
        let state = SortState::new(SortColumn::Product, SortDirection::Descending);
        assert_eq!(state.direction_of(SortColumn::Product), SortDirection::Descending);
        assert_eq!(state.direction_of(SortColumn::Id), SortDirection::Default);
        assert!(state.is_sorted());
        assert!(!SortState::default().is_sorted());
    }

    #[test]
    fn test_parse_column() {
        assert_eq!("ID".parse::<SortColumn>(), Ok(SortColumn::Id));
        assert_eq!("owner".parse::<SortColumn>(), Ok(SortColumn::User));
        assert!("price".parse::<SortColumn>().is_err());
    }
}
