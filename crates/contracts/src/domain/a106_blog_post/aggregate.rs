use crate::shared::catalog::CatalogItem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Статья блога (анонс на главной)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub date: NaiveDate,
    pub image: String,
    pub slug: String,
}

impl BlogPost {
    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    /// Дата публикации для карточки: "10 March 2025"
    pub fn display_date(&self) -> String {
        self.date.format("%-d %B %Y").to_string()
    }
}

impl CatalogItem for BlogPost {
    fn item_id(&self) -> u32 {
        self.id
    }

    fn category_key(&self) -> &str {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_parses_from_iso_string() {
        let json = r#"{"id": 1, "title": "t", "excerpt": "e", "category": "IoT",
                       "date": "2025-03-05", "image": "", "slug": "5-ways"}"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        assert_eq!(post.display_date(), "5 March 2025");
        assert_eq!(post.href(), "/blog/5-ways");
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let json = r#"{"id": 1, "title": "t", "excerpt": "e", "category": "IoT",
                       "date": "2025-02-30", "image": "", "slug": "x"}"#;
        assert!(serde_json::from_str::<BlogPost>(json).is_err());
    }
}
