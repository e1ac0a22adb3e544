//! Конфигуратор IoT-решения: набор выбранных продуктов и итоговая оценка.

use super::aggregate::{Product, ProductId};

/// Выбранные в конфигураторе продукты.
///
/// Порядок в итоге всегда совпадает с порядком каталога, а не с порядком кликов.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductConfiguration {
    selected: Vec<ProductId>,
}

impl ProductConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить продукт или убрать, если он уже выбран
    pub fn toggle(&mut self, id: ProductId) {
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Выбранные продукты в порядке каталога
    pub fn selected_products<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        catalog.iter().filter(|p| self.contains(p.id)).collect()
    }

    pub fn summary(&self, catalog: &[Product]) -> ConfigurationSummary {
        let products = self.selected_products(catalog);
        let mut total: u64 = 0;
        let mut is_estimate = false;

        for product in &products {
            match product.price_value() {
                Some(value) => match total.checked_add(value) {
                    Some(sum) => total = sum,
                    // переполнение: итог только оценка
                    None => {
                        total = u64::MAX;
                        is_estimate = true;
                    }
                },
                None => is_estimate = true,
            }
            if product.is_starting_price() {
                is_estimate = true;
            }
        }

        ConfigurationSummary {
            item_count: products.len(),
            total,
            is_estimate,
        }
    }
}

/// Итог конфигурации для панели "Your Solution"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationSummary {
    pub item_count: usize,
    /// Сумма в долларах (при переполнении `u64::MAX`)
    pub total: u64,
    /// Есть цены "From ..." или цены без числа
    pub is_estimate: bool,
}

impl ConfigurationSummary {
    /// "$1,477", "From $1,477" или "Price on request", если ни одной цены нет
    pub fn total_label(&self) -> String {
        if self.total == 0 && self.is_estimate {
            return "Price on request".to_string();
        }
        let amount = format!("${}", group_thousands(self.total));
        if self.is_estimate {
            format!("From {}", amount)
        } else {
            amount
        }
    }
}

impl Product {
    /// Числовая часть цены: "From $1,299" → 1299.
    ///
    /// `None` для цен без числа и для сумм больше `u64::MAX`.
    pub fn price_value(&self) -> Option<u64> {
        let (_, amount) = self.price.split_once('$')?;
        let digits: String = amount
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == ',')
            .filter(char::is_ascii_digit)
            .collect();
        digits.parse().ok()
    }

    /// Цена указана как "от"
    pub fn is_starting_price(&self) -> bool {
        self.price.trim_start().starts_with("From")
    }
}

/// Разделитель тысяч (запятая)
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, price: &str) -> Product {
        Product {
            id: ProductId(id),
            name: format!("NW-{} Device", id),
            category: "sensors".to_string(),
            description: String::new(),
            features: vec![],
            specifications: vec![],
            applications: vec![],
            image: String::new(),
            price: price.to_string(),
            in_stock: true,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "From $899"),
            product(2, "$129"),
            product(3, "$549"),
            product(4, "Contact us"),
        ]
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut config = ProductConfiguration::new();
        config.toggle(ProductId(2));
        assert!(config.contains(ProductId(2)));
        assert_eq!(config.len(), 1);

        config.toggle(ProductId(2));
        assert!(!config.contains(ProductId(2)));
        assert!(config.is_empty());
    }

    #[test]
    fn test_selected_products_follow_catalog_order() {
        let catalog = catalog();
        let mut config = ProductConfiguration::new();
        config.toggle(ProductId(3));
        config.toggle(ProductId(1));

        let ids: Vec<u32> = config
            .selected_products(&catalog)
            .iter()
            .map(|p| p.id.value())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_summary_exact_total() {
        let catalog = catalog();
        let mut config = ProductConfiguration::new();
        config.toggle(ProductId(2));
        config.toggle(ProductId(3));

        let summary = config.summary(&catalog);
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total, 678);
        assert!(!summary.is_estimate);
        assert_eq!(summary.total_label(), "$678");
    }

    #[test]
    fn test_summary_with_starting_price_is_estimate() {
        let catalog = catalog();
        let mut config = ProductConfiguration::new();
        config.toggle(ProductId(1));
        config.toggle(ProductId(3));

        let summary = config.summary(&catalog);
        assert_eq!(summary.total, 1448);
        assert!(summary.is_estimate);
        assert_eq!(summary.total_label(), "From $1,448");
    }

    #[test]
    fn test_summary_unpriced_product_is_estimate() {
        let catalog = catalog();
        let mut config = ProductConfiguration::new();
        config.toggle(ProductId(4));

        let summary = config.summary(&catalog);
        assert_eq!(summary.total, 0);
        assert!(summary.is_estimate);
        assert_eq!(summary.total_label(), "Price on request");
    }

    #[test]
    fn test_summary_unpriced_with_priced_keeps_floor() {
        let catalog = catalog();
        let mut config = ProductConfiguration::new();
        config.toggle(ProductId(2));
        config.toggle(ProductId(4));

        let summary = config.summary(&catalog);
        assert_eq!(summary.total, 129);
        assert_eq!(summary.total_label(), "From $129");
    }

    #[test]
    fn test_summary_large_prices_do_not_overflow() {
        let catalog = vec![
            product(1, "$3,000,000,000"),
            product(2, "$3,000,000,000"),
        ];
        let mut config = ProductConfiguration::new();
        config.toggle(ProductId(1));
        config.toggle(ProductId(2));

        let summary = config.summary(&catalog);
        assert_eq!(summary.total, 6_000_000_000);
        assert!(!summary.is_estimate);
        assert_eq!(summary.total_label(), "$6,000,000,000");
    }

    #[test]
    fn test_summary_saturates_on_overflow() {
        let catalog = vec![
            product(1, "$18,000,000,000,000,000,000"),
            product(2, "$18,000,000,000,000,000,000"),
        ];
        let mut config = ProductConfiguration::new();
        config.toggle(ProductId(1));
        config.toggle(ProductId(2));

        let summary = config.summary(&catalog);
        assert_eq!(summary.total, u64::MAX);
        assert!(summary.is_estimate);
        assert!(summary.total_label().starts_with("From $18,446,744"));
    }

    #[test]
    fn test_price_value() {
        assert_eq!(product(1, "From $1,299").price_value(), Some(1299));
        assert_eq!(product(1, "$129").price_value(), Some(129));
        assert_eq!(product(1, "Contact us").price_value(), None);
        assert_eq!(
            product(1, "$3,000,000,000").price_value(),
            Some(3_000_000_000)
        );
        assert_eq!(product(1, "$99,999,999,999,999,999,999").price_value(), None);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
