use crate::shared::icons::icon;
use contracts::domain::a105_testimonial::Testimonial;
use leptos::prelude::*;

#[component]
pub fn ClientTestimonial(testimonial: Testimonial) -> impl IntoView {
    let attribution = testimonial.attribution();

    view! {
        <figure class="client-testimonial">
            <span class="client-testimonial__mark">{icon("quote")}</span>
            <blockquote class="client-testimonial__quote">{testimonial.quote}</blockquote>
            <figcaption class="client-testimonial__author">
                <img class="client-testimonial__avatar" src=testimonial.image alt=testimonial.name.clone() />
                <div>
                    <span class="client-testimonial__name">{testimonial.name}</span>
                    <span class="client-testimonial__role">{attribution}</span>
                </div>
            </figcaption>
        </figure>
    }
}
