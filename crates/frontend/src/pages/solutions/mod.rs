//! Страница AI-решений.

mod ai_demo;
mod case_study_card;
mod implementation_timeline;
mod solution_tabs;
mod tech_specs;

use ai_demo::AiDemo;
use case_study_card::CaseStudyCard;
use implementation_timeline::ImplementationTimeline;
use solution_tabs::{SolutionDetail, SolutionTabs};
use tech_specs::TechSpecs;

use crate::shared::catalog_state::Tabs;
use crate::shared::components::ui::LinkButton;
use crate::shared::components::{Accordion, LoadError, PageHero, SectionHeader, StatBox};
use crate::shared::page_meta::PageMeta;
use contracts::pages::load_solutions_page;
use leptos::prelude::*;

#[component]
pub fn SolutionsPage() -> impl IntoView {
    let content = match load_solutions_page() {
        Ok(props) => view! { <SolutionsContent props=props /> }.into_any(),
        Err(e) => {
            log::error!("solutions page: {:#}", e);
            view! { <LoadError error=format!("{:#}", e) /> }.into_any()
        }
    };

    view! {
        <PageMeta
            title="AI Solutions"
            description="Explore NextWave's AI-powered business solutions including predictive analytics, process automation, computer vision, and natural language processing."
            keywords="AI solutions, predictive analytics, process automation, computer vision, NLP, artificial intelligence, Australia"
            path="/solutions"
        />
        {content}
    }
}

#[component]
fn SolutionsContent(props: contracts::pages::SolutionsPageProps) -> impl IntoView {
    let contracts::pages::SolutionsPageProps {
        solution_categories,
        case_studies,
        faqs,
        ..
    } = props;

    let tabs = Tabs::new(solution_categories.len());
    let categories = StoredValue::new(solution_categories);

    view! {
        <PageHero
            title="AI-Powered Business Solutions"
            lead="Transform your operations with intelligent automation and data-driven insights. Our AI solutions help Australian businesses optimize processes, reduce costs, and drive innovation."
            background="/images/ai-background-pattern.svg"
        >
            <div class="stat-row">
                <StatBox value="98%" label="Accuracy Rate" />
                <StatBox value="45%" label="Cost Reduction" />
                <StatBox value="3x" label="Faster Processing" />
            </div>
        </PageHero>

        // Solution categories
        <section class="section">
            <div class="container">
                <SectionHeader title="Our AI Solutions" />
                <SolutionTabs categories=categories tabs=tabs />
                {move || {
                    categories
                        .with_value(|list| tabs.active(list))
                        .map(|category| view! { <SolutionDetail category=category /> })
                }}
            </div>
        </section>

        // Interactive demo
        <section class="section section--neutral">
            <div class="container">
                <SectionHeader
                    title="Experience AI in Action"
                    subtitle="Try our interactive demo to see how our AI solutions process and analyze data to deliver actionable insights."
                />
                <AiDemo />
                <div class="section__footer">
                    <LinkButton href="/#contact">"Schedule Full Demo"</LinkButton>
                </div>
            </div>
        </section>

        // Implementation process
        <section class="section">
            <div class="container">
                <SectionHeader
                    title="From Concept to Implementation"
                    subtitle="Our proven methodology ensures a smooth transition from initial concept to fully operational AI solution."
                />
                <ImplementationTimeline />
            </div>
        </section>

        // Case studies
        <section class="section section--muted">
            <div class="container">
                <SectionHeader
                    title="Success Stories"
                    subtitle="Discover how our AI solutions have helped businesses across Australia achieve their goals."
                />
                <div class="grid grid--3">
                    {case_studies
                        .into_iter()
                        .enumerate()
                        .map(|(index, case_study)| view! { <CaseStudyCard case_study=case_study index=index /> })
                        .collect_view()}
                </div>
                <div class="section__footer">
                    <LinkButton href="/use-cases" variant="secondary">"View All Case Studies"</LinkButton>
                </div>
            </div>
        </section>

        // Technical specifications
        <section class="section">
            <div class="container">
                <SectionHeader title="Technical Specifications" />
                <TechSpecs />
            </div>
        </section>

        // FAQ
        <section class="section section--neutral">
            <div class="container container--narrow">
                <SectionHeader title="Frequently Asked Questions" />
                <Accordion items=faqs />
                <div class="section__footer">
                    <p>"Can't find the answer you're looking for?"</p>
                    <LinkButton href="/#contact" variant="secondary">"Contact Us"</LinkButton>
                </div>
            </div>
        </section>
    }
}
