use crate::shared::icons::icon;
use contracts::domain::a105_testimonial::Testimonial;
use contracts::shared::carousel::CarouselState;
use leptos::prelude::*;

/// Карусель отзывов: одна карточка, стрелки и точки навигации
#[component]
pub fn TestimonialCarousel(testimonials: Vec<Testimonial>) -> impl IntoView {
    let state = RwSignal::new(CarouselState::new(testimonials.len()));
    let testimonials = StoredValue::new(testimonials);

    let current = move || {
        let index = state.with(CarouselState::index);
        testimonials.with_value(|list| list.get(index).cloned())
    };

    view! {
        <div class="carousel" aria-roledescription="carousel">
            <button
                type="button"
                class="carousel__arrow carousel__arrow--prev"
                aria-label="Previous testimonial"
                on:click=move |_| state.update(CarouselState::prev)
            >
                {icon("chevron-left")}
            </button>

            {move || current().map(|t| {
                let attribution = t.attribution();
                view! {
                    <figure class="carousel__slide">
                        <span class="carousel__quote-mark">{icon("quote")}</span>
                        <blockquote class="carousel__quote">{t.quote}</blockquote>
                        <figcaption class="carousel__author">
                            <img class="carousel__avatar" src=t.image alt=t.name.clone() />
                            <span class="carousel__name">{t.name}</span>
                            <span class="carousel__role">{attribution}</span>
                        </figcaption>
                    </figure>
                }
            })}

            <button
                type="button"
                class="carousel__arrow carousel__arrow--next"
                aria-label="Next testimonial"
                on:click=move |_| state.update(CarouselState::next)
            >
                {icon("chevron-right")}
            </button>

            <div class="carousel__dots">
                {(0..state.with_untracked(CarouselState::len))
                    .map(|index| view! {
                        <button
                            type="button"
                            class=move || {
                                if state.with(|s| s.index() == index) {
                                    "carousel__dot carousel__dot--active"
                                } else {
                                    "carousel__dot"
                                }
                            }
                            aria-label=format!("Show testimonial {}", index + 1)
                            on:click=move |_| {
                                state.update(|s| {
                                    s.go_to(index);
                                });
                            }
                        />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
