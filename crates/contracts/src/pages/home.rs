use super::{ensure_unique, ensure_unique_ids, parse_document};
use crate::domain::a102_solution::FeaturedSolution;
use crate::domain::a105_testimonial::Testimonial;
use crate::domain::a106_blog_post::BlogPost;
use crate::shared::config::site_config;
use serde::{Deserialize, Serialize};

const HOME_JSON: &str = include_str!("../../data/home.json");

/// Данные главной страницы
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomePageProps {
    pub featured_solutions: Vec<FeaturedSolution>,
    pub testimonials: Vec<Testimonial>,
    pub blog_posts: Vec<BlogPost>,
    #[serde(default)]
    pub revalidate_secs: u64,
}

pub fn load_home_page() -> anyhow::Result<HomePageProps> {
    let mut props: HomePageProps = parse_document("home.json", HOME_JSON)?;

    ensure_unique_ids("blog_posts", &props.blog_posts)?;
    ensure_unique("featured_solutions", props.featured_solutions.iter().map(|s| s.id))?;
    ensure_unique("testimonials", props.testimonials.iter().map(|t| t.id))?;

    props.revalidate_secs = site_config().content.revalidate_secs;
    Ok(props)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_loads() {
        let props = load_home_page().unwrap();
        assert_eq!(props.featured_solutions.len(), 4);
        assert_eq!(props.testimonials.len(), 3);
        assert_eq!(props.blog_posts.len(), 3);
    }

    #[test]
    fn test_blog_posts_newest_first() {
        let props = load_home_page().unwrap();
        let dates: Vec<_> = props.blog_posts.iter().map(|p| p.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
        assert_eq!(props.blog_posts[0].display_date(), "10 March 2025");
    }

    #[test]
    fn test_duplicate_testimonial_id_is_rejected() {
        let mut props = load_home_page().unwrap();
        props.testimonials.push(props.testimonials[0].clone());
        let err = ensure_unique("testimonials", props.testimonials.iter().map(|t| t.id))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("testimonials: duplicate id {}", props.testimonials[0].id)
        );
    }
}
