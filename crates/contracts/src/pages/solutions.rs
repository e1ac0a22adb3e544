use super::{ensure_unique_ids, parse_document};
use crate::domain::a102_solution::SolutionCategory;
use crate::domain::a104_case_study::CaseStudy;
use crate::domain::a107_faq::Faq;
use crate::shared::config::site_config;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

const SOLUTIONS_JSON: &str = include_str!("../../data/solutions.json");

/// Данные страницы AI-решений
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionsPageProps {
    /// Порядок задаёт порядок вкладок
    pub solution_categories: Vec<SolutionCategory>,
    pub case_studies: Vec<CaseStudy>,
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub revalidate_secs: u64,
}

pub fn load_solutions_page() -> anyhow::Result<SolutionsPageProps> {
    let mut props: SolutionsPageProps = parse_document("solutions.json", SOLUTIONS_JSON)?;

    // Вкладки без категорий не имеют активного индекса
    ensure!(
        !props.solution_categories.is_empty(),
        "solution_categories must not be empty"
    );
    ensure_unique_ids("solution_categories", &props.solution_categories)?;

    props.case_studies = props
        .case_studies
        .into_iter()
        .map(CaseStudy::with_industry_key)
        .collect();
    ensure_unique_ids("case_studies", &props.case_studies)?;

    props.revalidate_secs = site_config().content.revalidate_secs;
    Ok(props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::{CatalogItem, TabState};

    #[test]
    fn test_solutions_load() {
        let props = load_solutions_page().unwrap();
        assert_eq!(props.solution_categories.len(), 5);
        assert_eq!(props.case_studies.len(), 3);
        assert_eq!(props.faqs.len(), 5);
    }

    #[test]
    fn test_tabs_over_solution_categories() {
        let props = load_solutions_page().unwrap();
        let mut tabs = TabState::new(props.solution_categories.len());

        let first = tabs.active(&props.solution_categories).unwrap();
        assert_eq!(first.slug, "predictive-analytics");

        assert!(tabs.set_active(3));
        let nlp = tabs.active(&props.solution_categories).unwrap();
        assert_eq!(nlp.title, "Natural Language Processing");
        assert_eq!(nlp.industries.len(), 5);

        assert!(!tabs.set_active(5));
        assert_eq!(tabs.active_index(), 3);
    }

    #[test]
    fn test_case_study_industry_keys() {
        let props = load_solutions_page().unwrap();
        let keys: Vec<&str> = props.case_studies.iter().map(|c| c.category_key()).collect();
        assert_eq!(keys, vec!["manufacturing", "insurance", "retail"]);
    }
}
