use crate::shared::components::ui::LinkButton;
use crate::shared::components::{stagger_delay, CardAnimated};
use contracts::domain::a102_solution::FeaturedSolution;
use leptos::prelude::*;

#[component]
pub fn SolutionCard(solution: FeaturedSolution, index: usize) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="solution-card">
            <div class="solution-card__icon">
                <img src=solution.icon alt=solution.title.clone() width="48" height="48" />
            </div>
            <div class="solution-card__body">
                <h3 class="card__title">{solution.title}</h3>
                <p class="card__text">{solution.description}</p>
                <LinkButton href=solution.link variant="link">"Learn More"</LinkButton>
            </div>
        </CardAnimated>
    }
}
