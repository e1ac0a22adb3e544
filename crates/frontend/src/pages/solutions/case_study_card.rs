use crate::shared::components::ui::{Badge, LinkButton};
use crate::shared::components::{stagger_delay, CardAnimated};
use contracts::domain::a104_case_study::CaseStudy;
use leptos::prelude::*;

#[component]
pub fn CaseStudyCard(case_study: CaseStudy, index: usize) -> impl IntoView {
    let href = case_study.detail_href();

    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="case-study-card">
            <img class="case-study-card__image" src=case_study.image alt=case_study.title.clone() loading="lazy" />
            <Badge variant="primary">{case_study.industry}</Badge>
            <h3 class="card__title">{case_study.title}</h3>
            <dl class="case-study-card__facts">
                <dt>"Challenge"</dt>
                <dd>{case_study.challenge}</dd>
                <dt>"Solution"</dt>
                <dd>{case_study.solution}</dd>
                <dt>"Result"</dt>
                <dd class="case-study-card__result">{case_study.result}</dd>
            </dl>
            <LinkButton href=href variant="link">"Read Case Study"</LinkButton>
        </CardAnimated>
    }
}
