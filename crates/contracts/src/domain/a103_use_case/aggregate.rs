use crate::domain::a105_testimonial::Testimonial;
use crate::shared::catalog::CatalogItem;
use serde::{Deserialize, Serialize};

/// История успеха клиента, фильтруется по отрасли
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCase {
    pub id: u32,
    pub title: String,
    /// Ключ отрасли: "manufacturing", "retail", ...
    pub industry: String,
    pub challenge: String,
    pub solution: String,
    pub results: Vec<String>,
    pub client_name: String,
    pub client_logo: String,
    pub image: String,
    pub slug: String,
}

impl UseCase {
    pub fn detail_href(&self) -> String {
        format!("/use-cases/{}", self.slug)
    }
}

impl CatalogItem for UseCase {
    fn item_id(&self) -> u32 {
        self.id
    }

    fn category_key(&self) -> &str {
        &self.industry
    }
}

/// Показатель результата: "73%" / "Reduction in Downtime"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMetric {
    pub label: String,
    pub value: String,
}

/// Главная история успеха на странице кейсов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedStory {
    pub industry_label: String,
    pub title: String,
    pub challenge: String,
    pub solution_intro: String,
    pub solution_points: Vec<String>,
    pub metrics: Vec<ResultMetric>,
    pub href: String,
    pub image: String,
    pub testimonial: Testimonial,
}

/// Сводка результатов по отрасли
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryResults {
    pub industry: String,
    pub highlights: Vec<String>,
}
