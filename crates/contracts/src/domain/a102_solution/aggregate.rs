use crate::shared::catalog::CatalogItem;
use serde::{Deserialize, Serialize};

/// Направление AI-решений (вкладка на странице решений)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionCategory {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub features: Vec<String>,
    /// Отрасли для бейджей: "Manufacturing", "Retail", ...
    pub industries: Vec<String>,
    pub image: String,
}

impl SolutionCategory {
    /// Ссылка "Learn More" для активной вкладки
    pub fn detail_href(&self) -> String {
        format!("/solutions/{}", self.slug)
    }
}

impl CatalogItem for SolutionCategory {
    fn item_id(&self) -> u32 {
        self.id
    }

    fn category_key(&self) -> &str {
        &self.slug
    }
}

/// Карточка решения на главной странице
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedSolution {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_href() {
        let solution = SolutionCategory {
            id: 5,
            title: "Custom AI Development".into(),
            slug: "custom-ai".into(),
            description: String::new(),
            features: vec![],
            industries: vec!["All Industries".into()],
            image: String::new(),
        };
        assert_eq!(solution.detail_href(), "/solutions/custom-ai");
        assert_eq!(solution.category_key(), "custom-ai");
    }
}
