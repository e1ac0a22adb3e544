use super::{ensure_known_categories, ensure_unique_categories, ensure_unique_ids, parse_document};
use crate::domain::a101_product::Product;
use crate::domain::common::Category;
use crate::shared::config::site_config;
use serde::{Deserialize, Serialize};

const PRODUCTS_JSON: &str = include_str!("../../data/products.json");

/// Данные страницы IoT-продуктов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsPageProps {
    pub product_categories: Vec<Category>,
    pub products: Vec<Product>,
    #[serde(default)]
    pub revalidate_secs: u64,
}

pub fn load_products_page() -> anyhow::Result<ProductsPageProps> {
    let mut props: ProductsPageProps = parse_document("products.json", PRODUCTS_JSON)?;

    ensure_unique_categories("product_categories", &props.product_categories)?;
    ensure_unique_ids("products", &props.products)?;
    ensure_known_categories("products", &props.products, &props.product_categories)?;

    props.revalidate_secs = site_config().content.revalidate_secs;
    log::debug!(
        "products page: {} products in {} categories",
        props.products.len(),
        props.product_categories.len()
    );
    Ok(props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::{filter_by_category, ALL_CATEGORIES};

    #[test]
    fn test_products_load() {
        let props = load_products_page().unwrap();
        assert_eq!(props.products.len(), 6);
        assert_eq!(props.product_categories[0].id, ALL_CATEGORIES);
        assert_eq!(props.revalidate_secs, 86400);
    }

    #[test]
    fn test_specifications_keep_order() {
        let props = load_products_page().unwrap();
        let hub = &props.products[0];
        assert_eq!(hub.name, "NW-S1000 Smart Sensor Hub");
        assert_eq!(hub.specifications[0].label, "Dimensions");
        assert_eq!(hub.specifications.last().unwrap().label, "Operating Temperature");
    }

    #[test]
    fn test_sensor_category() {
        let props = load_products_page().unwrap();
        let sensors = filter_by_category(&props.products, "sensors");
        let ids: Vec<u32> = sensors.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_custom_category_is_empty() {
        // "Custom Solutions" объявлена, но продуктов в ней нет
        let props = load_products_page().unwrap();
        assert!(props.product_categories.iter().any(|c| c.id == "custom"));
        assert!(filter_by_category(&props.products, "custom").is_empty());
    }
}
