//! Catalog records
//!
//! Raw records as delivered by the data source (`User`, `Category`, `Product`)
//! and the joined `EnrichedProduct` consumed by the filter and sort stages.
//! Raw records keep the source field names (`categoryId`, `ownerId`) on the wire.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type UserId = u32;
pub type CategoryId = u32;
pub type ProductId = u32;

/// Sex of a user, used by the display layer to pick a text tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    /// Owning user; must resolve at load time
    pub owner_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Category reference; must resolve at load time
    pub category_id: CategoryId,
}

/// A product with its category and (transitively) the category owner attached.
///
/// Built once by [`Catalog::join`](crate::catalog::Catalog::join). The category
/// and user are shared handles: every product in one category points at the
/// same `Category` and `User` allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
    pub category: Arc<Category>,
    pub user: Arc<User>,
}

impl EnrichedProduct {
    /// Category cell text, e.g. `"🍏 - Fruits"`
    pub fn category_label(&self) -> String {
        format!("{} - {}", self.category.icon, self.category.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_wire_format() {
        let user: User = serde_json::from_str(r#"{"id":5,"name":"Max","sex":"m"}"#).unwrap();
        assert_eq!(user.sex, Sex::Male);

        let json = serde_json::to_string(&Sex::Female).unwrap();
        assert_eq!(json, r#""f""#);
    }

    #[test]
    fn test_raw_records_use_source_field_names() {
        let category: Category =
            serde_json::from_str(r#"{"id":10,"title":"Fruits","icon":"🍏","ownerId":5}"#)
                .unwrap();
        assert_eq!(category.owner_id, 5);

        let product: Product =
            serde_json::from_str(r#"{"id":1,"name":"Apple","categoryId":10}"#).unwrap();
        assert_eq!(product.category_id, 10);
    }

    #[test]
    fn test_category_label() {
        let product = EnrichedProduct {
            id: 1,
            name: "Apple".to_string(),
            category_id: 10,
            category: Arc::new(Category {
                id: 10,
                title: "Fruits".to_string(),
                icon: "🍏".to_string(),
                owner_id: 5,
            }),
            user: Arc::new(User {
                id: 5,
                name: "Max".to_string(),
                sex: Sex::Male,
            }),
        };
        assert_eq!(product.category_label(), "🍏 - Fruits");
    }
}
