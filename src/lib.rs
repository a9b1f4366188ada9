//! Product Catalog - in-memory product browser
//!
//! Joins three static datasets (users, categories, products) once at load
//! time, then derives a filtered and sorted view for every user action.
//!
//! ## Pipeline
//!
//! ```text
//! Dataset -> Catalog::join -> filter_products -> sort_products -> CatalogView
//!                                   ^                 ^
//!                                   +-- SelectionState --+
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use product_catalog::{Catalog, CatalogBrowser, Dataset, SelectionAction, SortColumn};
//!
//! let catalog = Catalog::join(Dataset::sample().unwrap()).unwrap();
//! let mut browser = CatalogBrowser::new(catalog);
//!
//! browser.dispatch(SelectionAction::SetQuery("an".to_string())).unwrap();
//! let view = browser.dispatch(SelectionAction::ClickSort(SortColumn::Product)).unwrap();
//! assert!(!view.no_results);
//! ```

pub mod browser;
pub mod catalog;
pub mod command;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod selection;
pub mod sort;
pub mod view;

pub use browser::CatalogBrowser;
pub use catalog::Catalog;
pub use command::{Command, CommandError};
pub use config::{BrowserConfig, ConfigLoader};
pub use dataset::Dataset;
pub use error::{BrowserError, CatalogError, CatalogResult, RecordKind};
pub use filter::{filter_products, ProductFilter};
pub use model::{Category, CategoryId, EnrichedProduct, Product, ProductId, Sex, User, UserId};
pub use selection::{SelectionAction, SelectionState};
pub use sort::{sort_products, SortColumn, SortDirection, SortState};
pub use view::{CatalogView, ColumnHeader, ProductRow, RowTone, SortIndicator};
