//! Catalog browser session
//!
//! Owns the joined catalog and the single `SelectionState`. Every user action
//! goes through `dispatch`, which applies the transition and re-derives the
//! view before returning.

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::BrowserError;
use crate::selection::{SelectionAction, SelectionState};
use crate::view::CatalogView;

pub struct CatalogBrowser {
    catalog: Catalog,
    selection: SelectionState,
    view: CatalogView,
}

impl CatalogBrowser {
    /// Start a session with no filters and no sort
    pub fn new(catalog: Catalog) -> Self {
        Self::with_selection(catalog, SelectionState::default())
    }

    pub fn with_selection(catalog: Catalog, selection: SelectionState) -> Self {
        let view = CatalogView::derive(&catalog, &selection);
        Self {
            catalog,
            selection,
            view,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    /// Handle one user action.
    ///
    /// Owner and category ids must exist in the catalog; a rejected action
    /// leaves the session unchanged.
    pub fn dispatch(&mut self, action: SelectionAction) -> Result<&CatalogView, BrowserError> {
        if let Err(err) = self.validate(&action) {
            warn!("Rejected {:?}: {}", action, err);
            return Err(err);
        }

        debug!("Applying {:?}", action);
        let selection = std::mem::take(&mut self.selection);
        self.selection = selection.apply(action);
        self.view = CatalogView::derive(&self.catalog, &self.selection);

        debug!(
            "View refreshed: {} rows, no_results={}",
            self.view.len(),
            self.view.no_results
        );

        Ok(&self.view)
    }

    fn validate(&self, action: &SelectionAction) -> Result<(), BrowserError> {
        match action {
            SelectionAction::SelectOwner(id) if self.catalog.user(*id).is_none() => {
                Err(BrowserError::UnknownUser(*id))
            }
            SelectionAction::ToggleCategory(id) if self.catalog.category(*id).is_none() => {
                Err(BrowserError::UnknownCategory(*id))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::sort::SortColumn;

    fn browser() -> CatalogBrowser {
        CatalogBrowser::new(Catalog::join(Dataset::sample().unwrap()).unwrap())
    }

    #[test]
    fn test_new_session_shows_everything() {
        let browser = browser();
        assert_eq!(browser.view().len(), browser.catalog().products().len());
        assert_eq!(browser.selection(), &SelectionState::default());
    }

    #[test]
    fn test_dispatch_refreshes_view() {
        let mut browser = browser();
        let view = browser
            .dispatch(SelectionAction::SetQuery("an".to_string()))
            .unwrap();
        assert!(view
            .products
            .iter()
            .all(|p| p.name.to_lowercase().contains("an")));
        assert!(!view.is_empty());
    }

    #[test]
    fn test_unknown_ids_are_rejected_without_side_effects() {
        let mut browser = browser();
        browser
            .dispatch(SelectionAction::ClickSort(SortColumn::Id))
            .unwrap();
        let before = browser.selection().clone();

        assert_eq!(
            browser.dispatch(SelectionAction::SelectOwner(999)).unwrap_err(),
            BrowserError::UnknownUser(999)
        );
        assert_eq!(
            browser
                .dispatch(SelectionAction::ToggleCategory(999))
                .unwrap_err(),
            BrowserError::UnknownCategory(999)
        );
        assert_eq!(browser.selection(), &before);
    }
}
