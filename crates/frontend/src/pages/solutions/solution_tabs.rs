use crate::shared::catalog_state::Tabs;
use crate::shared::components::ui::{Badge, LinkButton};
use crate::shared::icons::icon;
use contracts::domain::a102_solution::SolutionCategory;
use leptos::prelude::*;

/// Полоса вкладок направлений
#[component]
pub fn SolutionTabs(categories: StoredValue<Vec<SolutionCategory>>, tabs: Tabs) -> impl IntoView {
    let titles = categories.with_value(|list| {
        list.iter()
            .map(|c| c.title.clone())
            .collect::<Vec<_>>()
    });

    view! {
        <div class="tabs" role="tablist" aria-label="AI solutions">
            {titles
                .into_iter()
                .enumerate()
                .map(|(index, title)| view! {
                    <button
                        type="button"
                        role="tab"
                        class=move || if tabs.is_active(index) { "tabs__tab tabs__tab--active" } else { "tabs__tab" }
                        aria-selected=move || tabs.is_active(index).to_string()
                        on:click=move |_| { tabs.set_active(index); }
                    >
                        {title}
                    </button>
                })
                .collect_view()}
        </div>
    }
}

/// Подробности активного направления
#[component]
pub fn SolutionDetail(category: SolutionCategory) -> impl IntoView {
    let href = category.detail_href();

    view! {
        <div class="solution-detail" role="tabpanel">
            <div class="solution-detail__text">
                <h3 class="solution-detail__title">{category.title.clone()}</h3>
                <p>{category.description}</p>

                <h4>"Key Features:"</h4>
                <ul class="check-list">
                    {category
                        .features
                        .into_iter()
                        .map(|feature| view! { <li>{icon("check")}<span>{feature}</span></li> })
                        .collect_view()}
                </ul>

                <h4>"Applicable Industries:"</h4>
                <div class="badge-row">
                    {category
                        .industries
                        .into_iter()
                        .map(|industry| view! { <Badge>{industry}</Badge> })
                        .collect_view()}
                </div>

                <LinkButton href=href>"Learn More"</LinkButton>
            </div>
            <div class="solution-detail__image">
                <img src=category.image alt=category.title />
            </div>
        </div>
    }
}
