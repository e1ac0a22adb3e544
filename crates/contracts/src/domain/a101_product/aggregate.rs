use crate::shared::catalog::CatalogItem;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор IoT-продукта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Строка технических характеристик ("Dimensions" → "120mm x 120mm x 30mm")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub label: String,
    pub value: String,
}

/// IoT-продукт из каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Ключ категории: "sensors", "infrastructure", "industrial", ...
    pub category: String,
    pub description: String,
    pub features: Vec<String>,
    pub specifications: Vec<Specification>,
    pub applications: Vec<String>,
    pub image: String,
    /// Цена как строка для отображения: "From $899", "$129"
    pub price: String,
    pub in_stock: bool,
}

impl Product {
    /// Модель из названия: "NW-S1000 Smart Sensor Hub" → "NW-S1000"
    pub fn model_code(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn availability_label(&self) -> &'static str {
        if self.in_stock {
            "In stock"
        } else {
            "Made to order"
        }
    }
}

impl CatalogItem for Product {
    fn item_id(&self) -> u32 {
        self.id.value()
    }

    fn category_key(&self) -> &str {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, in_stock: bool) -> Product {
        Product {
            id: ProductId(1),
            name: name.to_string(),
            category: "sensors".to_string(),
            description: String::new(),
            features: Vec::new(),
            specifications: Vec::new(),
            applications: Vec::new(),
            image: String::new(),
            price: "$129".to_string(),
            in_stock,
        }
    }

    #[test]
    fn test_model_code() {
        assert_eq!(product("NW-S1000 Smart Sensor Hub", true).model_code(), "NW-S1000");
        assert_eq!(product("Gateway", true).model_code(), "Gateway");
        assert_eq!(product("", true).model_code(), "");
    }

    #[test]
    fn test_availability_label() {
        assert_eq!(product("x", true).availability_label(), "In stock");
        assert_eq!(product("x", false).availability_label(), "Made to order");
    }

    #[test]
    fn test_id_is_plain_number_in_json() {
        let p = product("NW-T100", true);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["in_stock"], true);
    }
}
