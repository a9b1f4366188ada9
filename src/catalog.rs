//! Catalog join
//!
//! Resolves every product's category and the category's owner once, at load
//! time. A product's displayed user is its category's owner: there is no
//! direct product -> user link in the source data.
//!
//! ```text
//! Product --categoryId--> Category --ownerId--> User
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::error::{CatalogError, CatalogResult, RecordKind};
use crate::model::{Category, CategoryId, EnrichedProduct, User, UserId};

/// The joined, read-only catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    users: Vec<Arc<User>>,
    categories: Vec<Arc<Category>>,
    products: Vec<EnrichedProduct>,
    user_index: HashMap<UserId, usize>,
    category_index: HashMap<CategoryId, usize>,
}

impl Catalog {
    /// Join the three raw collections.
    ///
    /// Products keep the order of `dataset.products`. Every category is checked
    /// for a resolvable owner, including categories without products.
    pub fn join(dataset: Dataset) -> CatalogResult<Self> {
        let Dataset {
            users,
            categories,
            products,
        } = dataset;

        let users: Vec<Arc<User>> = users.into_iter().map(Arc::new).collect();
        let user_index = index_by_id(&users, |u| u.id, RecordKind::User)?;

        let categories: Vec<Arc<Category>> = categories.into_iter().map(Arc::new).collect();
        let category_index = index_by_id(&categories, |c| c.id, RecordKind::Category)?;

        // category position -> owner, resolved once per category
        let mut owners = Vec::with_capacity(categories.len());
        for category in &categories {
            let owner = user_index.get(&category.owner_id).ok_or(CatalogError::UnknownOwner {
                category_id: category.id,
                owner_id: category.owner_id,
            })?;
            owners.push(Arc::clone(&users[*owner]));
        }

        let mut seen_products = HashSet::with_capacity(products.len());
        let mut enriched = Vec::with_capacity(products.len());
        for product in products {
            if !seen_products.insert(product.id) {
                return Err(CatalogError::DuplicateId {
                    kind: RecordKind::Product,
                    id: product.id,
                });
            }

            let position =
                *category_index
                    .get(&product.category_id)
                    .ok_or(CatalogError::UnknownCategory {
                        product_id: product.id,
                        category_id: product.category_id,
                    })?;

            enriched.push(EnrichedProduct {
                id: product.id,
                name: product.name,
                category_id: product.category_id,
                category: Arc::clone(&categories[position]),
                user: Arc::clone(&owners[position]),
            });
        }

        info!(
            "Joined catalog: {} products, {} categories, {} users",
            enriched.len(),
            categories.len(),
            users.len()
        );

        Ok(Self {
            users,
            categories,
            products: enriched,
            user_index,
            category_index,
        })
    }

    /// Enriched products in source order
    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }

    /// Users in source order
    pub fn users(&self) -> &[Arc<User>] {
        &self.users
    }

    /// Categories in source order
    pub fn categories(&self) -> &[Arc<Category>] {
        &self.categories
    }

    pub fn user(&self, id: UserId) -> Option<&Arc<User>> {
        self.user_index.get(&id).map(|&idx| &self.users[idx])
    }

    pub fn category(&self, id: CategoryId) -> Option<&Arc<Category>> {
        self.category_index.get(&id).map(|&idx| &self.categories[idx])
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Build an id -> position index, rejecting duplicate ids
fn index_by_id<T>(
    records: &[Arc<T>],
    id_of: impl Fn(&T) -> u32,
    kind: RecordKind,
) -> CatalogResult<HashMap<u32, usize>> {
    let mut index = HashMap::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        let id = id_of(record.as_ref());
        if index.insert(id, position).is_some() {
            return Err(CatalogError::DuplicateId { kind, id });
        }
    }
    debug!("Indexed {} {} records", index.len(), kind);
    Ok(index)
}
