//! Selection state and user actions
//!
//! The complete set of user-adjustable parameters (query, owner, categories,
//! sort) and the pure transition `SelectionState::apply`. Filter state and
//! sort state are independent: resetting filters keeps the sort.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::{CategoryId, UserId};
use crate::sort::{SortColumn, SortState};

/// User-adjustable view parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Search field contents, untrimmed
    pub query: String,
    /// Selected owner; `None` means all users
    pub owner: Option<UserId>,
    /// Selected categories; empty means all categories
    pub categories: BTreeSet<CategoryId>,
    pub sort: SortState,
}

/// Actions a user can take on the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum SelectionAction {
    /// Search field edited
    SetQuery(String),
    /// Search field clear button
    ClearQuery,
    /// Owner tab clicked
    SelectOwner(UserId),
    /// "All" owner tab clicked
    SelectAllOwners,
    /// Category chip clicked; toggles membership
    ToggleCategory(CategoryId),
    /// "All" category chip clicked
    SelectAllCategories,
    /// "Reset all filters" clicked; sort is kept
    ResetFilters,
    /// Column sort control clicked
    ClickSort(SortColumn),
}

impl SelectionState {
    /// Produce the state that follows `action`
    pub fn apply(self, action: SelectionAction) -> Self {
        let mut next = self;
        match action {
            SelectionAction::SetQuery(query) => next.query = query,
            SelectionAction::ClearQuery => next.query.clear(),
            SelectionAction::SelectOwner(owner) => next.owner = Some(owner),
            SelectionAction::SelectAllOwners => next.owner = None,
            SelectionAction::ToggleCategory(category) => {
                if !next.categories.remove(&category) {
                    next.categories.insert(category);
                }
            }
            SelectionAction::SelectAllCategories => next.categories.clear(),
            SelectionAction::ResetFilters => {
                next.query.clear();
                next.owner = None;
                next.categories.clear();
            }
            SelectionAction::ClickSort(column) => next.sort = next.sort.click(column),
        }
        next
    }

    /// Whether the owner tab for `owner` (`None` = "All") is highlighted
    pub fn is_owner_active(&self, owner: Option<UserId>) -> bool {
        self.owner == owner
    }

    pub fn is_category_selected(&self, category: CategoryId) -> bool {
        self.categories.contains(&category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortDirection;
    use pretty_assertions::assert_eq;

    fn apply_all(actions: impl IntoIterator<Item = SelectionAction>) -> SelectionState {
        actions
            .into_iter()
            .fold(SelectionState::default(), SelectionState::apply)
    }

    #[test]
    fn test_default_state_is_unrestricted() {
        let state = SelectionState::default();
        assert_eq!(state.query, "");
        assert!(state.owner.is_none());
        assert!(state.categories.is_empty());
        assert_eq!(state.sort, SortState::default());
    }

    #[test]
    fn test_query_and_clear() {
        let state = apply_all([SelectionAction::SetQuery("  ap".to_string())]);
        assert_eq!(state.query, "  ap");

        let state = state.apply(SelectionAction::ClearQuery);
        assert_eq!(state.query, "");
    }

    #[test]
    fn test_owner_selection() {
        let state = apply_all([SelectionAction::SelectOwner(5)]);
        assert_eq!(state.owner, Some(5));
        assert!(state.is_owner_active(Some(5)));
        assert!(!state.is_owner_active(None));

        let state = state.apply(SelectionAction::SelectOwner(6));
        assert_eq!(state.owner, Some(6));

        let state = state.apply(SelectionAction::SelectAllOwners);
        assert!(state.is_owner_active(None));
    }

    #[test]
    fn test_category_toggle() {
        let state = apply_all([
            SelectionAction::ToggleCategory(10),
            SelectionAction::ToggleCategory(20),
        ]);
        assert_eq!(state.categories, BTreeSet::from([10, 20]));

        let state = state.apply(SelectionAction::ToggleCategory(10));
        assert_eq!(state.categories, BTreeSet::from([20]));
        assert!(!state.is_category_selected(10));
        assert!(state.is_category_selected(20));

        let state = state.apply(SelectionAction::SelectAllCategories);
        assert!(state.categories.is_empty());
    }

    #[test]
    fn test_reset_keeps_sort() {
        let state = apply_all([
            SelectionAction::SetQuery("milk".to_string()),
            SelectionAction::SelectOwner(1),
            SelectionAction::ToggleCategory(2),
            SelectionAction::ClickSort(SortColumn::User),
            SelectionAction::ClickSort(SortColumn::User),
            SelectionAction::ResetFilters,
        ]);

        assert_eq!(
            state,
            SelectionState {
                sort: SortState::new(SortColumn::User, SortDirection::Descending),
                ..SelectionState::default()
            }
        );
    }

    #[test]
    fn test_sort_clicks() {
        let state = apply_all([SelectionAction::ClickSort(SortColumn::Id)]);
        assert_eq!(state.sort.direction, SortDirection::Ascending);

        let state = apply_all([
            SelectionAction::ClickSort(SortColumn::Id),
            SelectionAction::ClickSort(SortColumn::Id),
            SelectionAction::ClickSort(SortColumn::Id),
        ]);
        assert_eq!(state.sort.direction, SortDirection::Default);

        let state = state.apply(SelectionAction::ClickSort(SortColumn::Category));
        assert_eq!(
            state.sort,
            SortState::new(SortColumn::Category, SortDirection::Ascending)
        );
    }

    #[test]
    fn test_action_wire_format() {
        let json = serde_json::to_string(&SelectionAction::ToggleCategory(3)).unwrap();
        assert_eq!(json, r#"{"action":"toggle_category","value":3}"#);

        let action: SelectionAction =
            serde_json::from_str(r#"{"action":"click_sort","value":"user"}"#).unwrap();
        assert_eq!(action, SelectionAction::ClickSort(SortColumn::User));
    }
}
