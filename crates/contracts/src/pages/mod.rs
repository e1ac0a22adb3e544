//! Статические данные страниц (аналог build-time data fetch).
//!
//! Каждая страница получает свой набор данных из JSON, встроенного в сборку.
//! Загрузчик проверяет инварианты коллекций до того, как данные попадут в UI.

pub mod home;
pub mod products;
pub mod solutions;
pub mod use_cases;

pub use home::{load_home_page, HomePageProps};
pub use products::{load_products_page, ProductsPageProps};
pub use solutions::{load_solutions_page, SolutionsPageProps};
pub use use_cases::{load_use_cases_page, UseCasesPageProps};

use crate::domain::common::Category;
use crate::shared::catalog::{find_duplicate, CatalogItem};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;

fn parse_document<T: DeserializeOwned>(name: &str, raw: &str) -> anyhow::Result<T> {
    serde_json::from_str(raw).with_context(|| format!("failed to parse {name}"))
}

fn ensure_unique_ids<T: CatalogItem>(collection: &str, items: &[T]) -> anyhow::Result<()> {
    ensure_unique(collection, items.iter().map(CatalogItem::item_id))
}

/// Для коллекций, которые не фильтруются и не реализуют `CatalogItem`
fn ensure_unique(collection: &str, ids: impl IntoIterator<Item = u32>) -> anyhow::Result<()> {
    if let Some(id) = find_duplicate(ids) {
        bail!("{collection}: duplicate id {id}");
    }
    Ok(())
}

fn ensure_unique_categories(collection: &str, categories: &[Category]) -> anyhow::Result<()> {
    for (i, category) in categories.iter().enumerate() {
        if category.id.trim().is_empty() {
            bail!("{collection}: category #{i} has an empty id");
        }
        if categories[..i].iter().any(|c| c.id == category.id) {
            bail!("{collection}: duplicate category '{}'", category.id);
        }
    }
    Ok(())
}

/// Каждый элемент должен ссылаться на объявленную категорию
fn ensure_known_categories<T: CatalogItem>(
    collection: &str,
    items: &[T],
    categories: &[Category],
) -> anyhow::Result<()> {
    for item in items {
        let key = item.category_key();
        if !categories.iter().any(|c| !c.is_all() && c.id == key) {
            bail!(
                "{collection}: item {} refers to unknown category '{key}'",
                item.item_id()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::test_support::item;

    fn categories() -> Vec<Category> {
        vec![
            Category::new("all", "All"),
            Category::new("sensors", "Sensors"),
            Category::new("industrial", "Industrial"),
        ]
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let items = vec![item(1, "sensors"), item(1, "industrial")];
        let err = ensure_unique_ids("products", &items).unwrap_err();
        assert_eq!(err.to_string(), "products: duplicate id 1");
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let items = vec![item(1, "sensors"), item(2, "robots")];
        let err = ensure_known_categories("products", &items, &categories()).unwrap_err();
        assert!(err.to_string().contains("unknown category 'robots'"));
    }

    #[test]
    fn test_item_cannot_claim_all() {
        let items = vec![item(1, "all")];
        assert!(ensure_known_categories("products", &items, &categories()).is_err());
    }

    #[test]
    fn test_duplicate_category_is_rejected() {
        let mut list = categories();
        list.push(Category::new("sensors", "Sensors again"));
        assert!(ensure_unique_categories("product_categories", &list).is_err());
        assert!(ensure_unique_categories("product_categories", &categories()).is_ok());
    }

    #[test]
    fn test_parse_error_names_document() {
        let err = parse_document::<Vec<Category>>("products.json", "{").unwrap_err();
        assert_eq!(err.to_string(), "failed to parse products.json");
    }
}
