use crate::shared::icons::icon;
use contracts::domain::a107_faq::Faq;
use contracts::shared::accordion::AccordionState;
use leptos::prelude::*;

/// FAQ accordion: одновременно раскрыт один вопрос
#[component]
pub fn Accordion(items: Vec<Faq>) -> impl IntoView {
    let state = RwSignal::new(AccordionState::new());

    view! {
        <div class="accordion">
            {items
                .into_iter()
                .enumerate()
                .map(|(index, faq)| {
                    let is_open = move || state.with(|s| s.is_open(index));
                    let panel_id = format!("faq-panel-{}", index);
                    view! {
                        <div class=move || if is_open() { "accordion__item accordion__item--open" } else { "accordion__item" }>
                            <button
                                type="button"
                                class="accordion__trigger"
                                aria-expanded=move || is_open().to_string()
                                aria-controls=panel_id.clone()
                                on:click=move |_| state.update(|s| s.toggle(index))
                            >
                                <span class="accordion__question">{faq.question}</span>
                                <span class="accordion__chevron">{icon("chevron-down")}</span>
                            </button>
                            <Show when=is_open>
                                <div id=panel_id.clone() class="accordion__panel">
                                    <p>{faq.answer.clone()}</p>
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
