use super::{ensure_known_categories, ensure_unique_categories, ensure_unique_ids, parse_document};
use crate::domain::a103_use_case::{FeaturedStory, IndustryResults, UseCase};
use crate::domain::common::Category;
use crate::shared::config::site_config;
use serde::{Deserialize, Serialize};

const USE_CASES_JSON: &str = include_str!("../../data/use_cases.json");

/// Данные страницы кейсов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UseCasesPageProps {
    pub industries: Vec<Category>,
    pub use_cases: Vec<UseCase>,
    pub featured_story: FeaturedStory,
    pub industry_results: Vec<IndustryResults>,
    #[serde(default)]
    pub revalidate_secs: u64,
}

pub fn load_use_cases_page() -> anyhow::Result<UseCasesPageProps> {
    let mut props: UseCasesPageProps = parse_document("use_cases.json", USE_CASES_JSON)?;

    ensure_unique_categories("industries", &props.industries)?;
    ensure_unique_ids("use_cases", &props.use_cases)?;
    ensure_known_categories("use_cases", &props.use_cases, &props.industries)?;

    props.revalidate_secs = site_config().content.revalidate_secs;
    log::debug!("use cases page: {} use cases", props.use_cases.len());
    Ok(props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::FilterState;

    #[test]
    fn test_use_cases_load() {
        let props = load_use_cases_page().unwrap();
        assert_eq!(props.use_cases.len(), 6);
        assert_eq!(props.industries.len(), 7);
        assert_eq!(props.featured_story.metrics.len(), 5);
        assert_eq!(props.industry_results.len(), 6);
    }

    #[test]
    fn test_every_industry_has_one_use_case() {
        let props = load_use_cases_page().unwrap();
        let mut state = FilterState::new(&props.industries);
        for industry in props.industries.iter().filter(|c| !c.is_all()) {
            assert!(state.set_active(&industry.id));
            let filtered = state.apply(&props.use_cases);
            assert_eq!(filtered.len(), 1, "industry {}", industry.id);
            assert_eq!(filtered.items[0].industry, industry.id);
        }
    }
}
