use crate::shared::catalog::CatalogItem;
use serde::{Deserialize, Serialize};

/// Краткий кейс для сетки "Success Stories" на странице решений
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: u32,
    pub title: String,
    /// Отрасль в отображаемом виде: "Manufacturing"
    pub industry: String,
    pub challenge: String,
    pub solution: String,
    pub result: String,
    pub image: String,
    pub slug: String,
    /// Ключ отрасли для фильтра, вычисляется из `industry`
    #[serde(skip)]
    industry_key: String,
}

impl CaseStudy {
    /// Заполняет ключ отрасли после десериализации
    pub fn with_industry_key(mut self) -> Self {
        self.industry_key = self.industry.trim().to_lowercase();
        self
    }

    pub fn detail_href(&self) -> String {
        format!("/case-studies/{}", self.slug)
    }
}

impl CatalogItem for CaseStudy {
    fn item_id(&self) -> u32 {
        self.id
    }

    fn category_key(&self) -> &str {
        &self.industry_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::filter_by_category;

    #[test]
    fn test_industry_key_is_lowercase() {
        let json = r#"[
            {"id": 1, "title": "A", "industry": "Manufacturing", "challenge": "", "solution": "",
             "result": "", "image": "", "slug": "a"},
            {"id": 2, "title": "B", "industry": "Retail", "challenge": "", "solution": "",
             "result": "", "image": "", "slug": "b"}
        ]"#;
        let studies: Vec<CaseStudy> = serde_json::from_str::<Vec<CaseStudy>>(json)
            .unwrap()
            .into_iter()
            .map(CaseStudy::with_industry_key)
            .collect();

        assert_eq!(studies[0].category_key(), "manufacturing");
        let retail = filter_by_category(&studies, "retail");
        assert_eq!(retail.len(), 1);
        assert_eq!(retail[0].id, 2);
    }
}
