//! Страница кейсов: фильтр по отрасли, карточки, главный кейс и итоги по отраслям.

mod client_testimonial;
mod use_case_card;

use client_testimonial::ClientTestimonial;
use use_case_card::UseCaseCard;

use crate::shared::catalog_state::CategoryFilter;
use crate::shared::components::ui::LinkButton;
use crate::shared::components::{
    CategoryFilterBar, EmptyState, LoadError, PageHero, ResultsMetrics, SectionHeader,
};
use crate::shared::icons::icon;
use crate::shared::page_meta::PageMeta;
use contracts::domain::a103_use_case::{FeaturedStory, IndustryResults};
use contracts::pages::load_use_cases_page;
use leptos::prelude::*;

#[component]
pub fn UseCasesPage() -> impl IntoView {
    let content = match load_use_cases_page() {
        Ok(props) => view! { <UseCasesContent props=props /> }.into_any(),
        Err(e) => {
            log::error!("use cases page: {:#}", e);
            view! { <LoadError error=format!("{:#}", e) /> }.into_any()
        }
    };

    view! {
        <PageMeta
            title="Use Cases"
            description="Explore real-world applications of NextWave's AI and IoT solutions across various industries including manufacturing, healthcare, retail, and more."
            keywords="AI use cases, IoT applications, business automation, digital transformation, Australia"
            path="/use-cases"
        />
        {content}
    }
}

#[component]
fn UseCasesContent(props: contracts::pages::UseCasesPageProps) -> impl IntoView {
    let contracts::pages::UseCasesPageProps {
        industries,
        use_cases,
        featured_story,
        industry_results,
        ..
    } = props;

    let filter = CategoryFilter::new(&industries);
    let industry_names = StoredValue::new(
        industries
            .iter()
            .map(|c| (c.id.clone(), c.name.clone()))
            .collect::<Vec<_>>(),
    );
    let catalog = StoredValue::new(use_cases);
    let filtered = Memo::new(move |_| catalog.with_value(|items| filter.apply(items)));

    view! {
        <PageHero
            title="Real-World Impact"
            lead="Discover how NextWave's AI and IoT solutions are transforming businesses across Australia. Explore our collection of success stories and see the measurable results our clients have achieved."
            background="/images/use-cases-background.svg"
        />

        // Industry filter
        <section class="section section--neutral section--compact">
            <div class="container">
                <SectionHeader title="Browse by Industry" />
                <CategoryFilterBar categories=industries filter=filter label="Industries" />
            </div>
        </section>

        // Use case grid
        <section class="section">
            <div class="container">
                <SectionHeader title="Success Stories" />
                <Show
                    when=move || !filtered.with(|f| f.is_empty_state())
                    fallback=move || view! {
                        <EmptyState
                            message="No use cases found for this industry. Please try another industry or contact us to discuss your specific needs."
                            reset_label="View All Use Cases"
                            on_reset=Callback::new(move |_| filter.reset())
                        />
                    }
                >
                    <div class="grid grid--2 catalog-grid">
                        {move || {
                            filtered
                                .get()
                                .items
                                .into_iter()
                                .enumerate()
                                .map(|(index, use_case)| {
                                    let industry = industry_names.with_value(|names| {
                                        names
                                            .iter()
                                            .find(|(id, _)| *id == use_case.industry)
                                            .map(|(_, name)| name.clone())
                                            .unwrap_or_else(|| use_case.industry.clone())
                                    });
                                    view! { <UseCaseCard use_case=use_case industry=industry index=index /> }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>
        </section>

        // Featured story
        <section class="section section--muted">
            <div class="container">
                <SectionHeader title="Featured Success Story" />
                <FeaturedStoryPanel story=featured_story />
            </div>
        </section>

        // Results by industry
        <section class="section">
            <div class="container">
                <SectionHeader
                    title="Proven Results Across Industries"
                    subtitle="Our solutions deliver measurable impact across various sectors. Here's a snapshot of the results our clients have achieved."
                />
                <div class="grid grid--3">
                    {industry_results
                        .into_iter()
                        .map(|results| view! { <IndustryResultsCard results=results /> })
                        .collect_view()}
                </div>
            </div>
        </section>

        // CTA
        <section class="section section--cta">
            <div class="container cta">
                <h2>"Ready to Transform Your Business?"</h2>
                <p class="cta__lead">
                    "Let's discuss how NextWave's AI and IoT solutions can address your specific challenges and drive measurable results."
                </p>
                <div class="cta__actions">
                    <LinkButton href="/#contact" variant="white">"Schedule a Consultation"</LinkButton>
                    <LinkButton href="/solutions" variant="outline-white">"Explore Our Solutions"</LinkButton>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturedStoryPanel(story: FeaturedStory) -> impl IntoView {
    view! {
        <article class="featured-story">
            <div class="featured-story__main">
                <div class="featured-story__text">
                    <span class="featured-story__eyebrow">{story.industry_label}</span>
                    <h3 class="featured-story__title">{story.title.clone()}</h3>

                    <h4>"Challenge:"</h4>
                    <p>{story.challenge}</p>

                    <h4>"Solution:"</h4>
                    <p>{story.solution_intro}</p>
                    <ul class="check-list">
                        {story
                            .solution_points
                            .into_iter()
                            .map(|point| view! { <li>{icon("check")}<span>{point}</span></li> })
                            .collect_view()}
                    </ul>

                    <h4>"Results:"</h4>
                    <ResultsMetrics metrics=story.metrics />

                    <LinkButton href=story.href>"Read Full Case Study"</LinkButton>
                </div>
                <div class="featured-story__image">
                    <img src=story.image alt=story.title />
                </div>
            </div>
            <div class="featured-story__testimonial">
                <ClientTestimonial testimonial=story.testimonial />
            </div>
        </article>
    }
}

#[component]
fn IndustryResultsCard(results: IndustryResults) -> impl IntoView {
    view! {
        <div class="results-card">
            <div class="results-card__icon">{icon("chart")}</div>
            <h3 class="card__title">{results.industry}</h3>
            <ul class="results-card__list">
                {results
                    .highlights
                    .into_iter()
                    .map(|highlight| view! { <li><span class="spec-panel__dot"></span><span>{highlight}</span></li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
