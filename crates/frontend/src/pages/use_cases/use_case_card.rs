use crate::shared::components::ui::{Badge, LinkButton};
use crate::shared::components::{stagger_delay, CardAnimated};
use crate::shared::icons::icon;
use contracts::domain::a103_use_case::UseCase;
use leptos::prelude::*;

#[component]
pub fn UseCaseCard(
    use_case: UseCase,
    /// Название отрасли для бейджа
    industry: String,
    index: usize,
) -> impl IntoView {
    let href = use_case.detail_href();

    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="use-case-card">
            <img class="use-case-card__image" src=use_case.image alt=use_case.title.clone() loading="lazy" />
            <div class="use-case-card__body">
                <div class="use-case-card__meta">
                    <Badge variant="primary">{industry}</Badge>
                    <img class="use-case-card__logo" src=use_case.client_logo alt=use_case.client_name />
                </div>
                <h3 class="card__title">{use_case.title}</h3>

                <h4>"Challenge"</h4>
                <p class="card__text">{use_case.challenge}</p>

                <h4>"Solution"</h4>
                <p class="card__text">{use_case.solution}</p>

                <h4>"Results"</h4>
                <ul class="check-list">
                    {use_case
                        .results
                        .into_iter()
                        .map(|result| view! { <li>{icon("check")}<span>{result}</span></li> })
                        .collect_view()}
                </ul>

                <LinkButton href=href variant="link">"Read Full Story"</LinkButton>
            </div>
        </CardAnimated>
    }
}
