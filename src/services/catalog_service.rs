use crate::data::database::Database;
use crate::data::models::menu_item::{MenuItem, NewMenuItem, UpdateMenuItem};
use crate::data::models::money::Money;
use crate::data::repos::implementors::catalog_repo::CatalogRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::CatalogServiceError;
use std::collections::BTreeMap;

/// Available items keyed by category; each list is in creation order.
pub type MenuByCategory = BTreeMap<String, Vec<MenuItem>>;

/// Fields an admin may change on an existing item. `None` keeps the stored value.
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuItemChanges<'a> {
    pub name: Option<&'a str>,
    pub price: Option<&'a Money>,
    pub category: Option<&'a str>,
    pub description: Option<&'a str>,
    pub available: Option<bool>,
}

pub struct CatalogService {
    catalog: CatalogRepo,
}

impl CatalogService {
    pub fn new(db: Database) -> Self {
        CatalogService {
            catalog: CatalogRepo::new(db),
        }
    }

    pub async fn list_available(&self) -> Result<MenuByCategory, CatalogServiceError> {
        let items = self.catalog.get_available().await.map_err(db_error)?;

        let mut menu = MenuByCategory::new();
        for item in items {
            menu.entry(item.category.clone()).or_default().push(item);
        }

        Ok(menu)
    }

    /// Every item, unavailable ones included.
    pub async fn list_all(&self) -> Result<Vec<MenuItem>, CatalogServiceError> {
        self.catalog.get_all().await.map_err(db_error)
    }

    /// New items are always available.
    pub async fn create(
        &self,
        name: &str,
        price: &Money,
        category: &str,
        description: Option<&str>,
    ) -> Result<i32, CatalogServiceError> {
        let name = required("Name", name)?;
        let category = required("Category", category)?;
        check_price(price)?;

        let item = NewMenuItem {
            name,
            price: price.clone(),
            category,
            description: description.map(str::trim).unwrap_or_default(),
            available: true,
        };

        let id = self.catalog.add(item).await.map_err(db_error)?;

        tracing::info!(menu_item_id = id, name, category, %price, "Menu item created");

        Ok(id)
    }

    pub async fn update(
        &self,
        id: i32,
        changes: MenuItemChanges<'_>,
    ) -> Result<(), CatalogServiceError> {
        let form = UpdateMenuItem {
            name: changes.name.map(|n| required("Name", n)).transpose()?,
            price: changes
                .price
                .map(|p| check_price(p).map(|_| p.clone()))
                .transpose()?,
            category: changes.category.map(|c| required("Category", c)).transpose()?,
            description: changes.description.map(str::trim),
            available: changes.available,
            updated_at: chrono::Utc::now().naive_utc(),
        };

        let rows = self.catalog.update(id, form).await.map_err(db_error)?;
        if rows == 0 {
            return Err(CatalogServiceError::ItemNotFound);
        }

        tracing::info!(menu_item_id = id, "Menu item updated");

        Ok(())
    }
}

fn db_error(e: diesel::result::Error) -> CatalogServiceError {
    tracing::error!("Catalog store error: {}", e);
    CatalogServiceError::DatabaseError
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, CatalogServiceError> {
    let value = value.trim();
    if value.is_empty() {
        Err(CatalogServiceError::InvalidInput(format!("{field} is required")))
    } else {
        Ok(value)
    }
}

fn check_price(price: &Money) -> Result<(), CatalogServiceError> {
    if price.is_negative() {
        Err(CatalogServiceError::InvalidInput(
            "Price must not be negative".to_string(),
        ))
    } else {
        Ok(())
    }
}
