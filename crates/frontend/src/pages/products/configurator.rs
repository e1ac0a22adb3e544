use crate::shared::components::ui::{Button, LinkButton};
use crate::shared::icons::icon;
use contracts::domain::a101_product::{Product, ProductConfiguration};
use leptos::prelude::*;

/// Конфигуратор: выбор продуктов и итоговая оценка стоимости
#[component]
pub fn ProductConfigurator(catalog: StoredValue<Vec<Product>>) -> impl IntoView {
    let config = RwSignal::new(ProductConfiguration::new());

    let summary = move || config.with(|c| catalog.with_value(|items| c.summary(items)));
    let selected_names = move || {
        config.with(|c| {
            catalog.with_value(|items| {
                c.selected_products(items)
                    .into_iter()
                    .map(|p| p.name.clone())
                    .collect::<Vec<_>>()
            })
        })
    };

    let options = catalog.with_value(|items| {
        items
            .iter()
            .map(|p| (p.id, p.name.clone(), p.price.clone()))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="configurator">
            <div class="configurator__options">
                <h3>"1. Choose your devices"</h3>
                {options
                    .into_iter()
                    .map(|(id, name, price)| {
                        let is_selected = move || config.with(|c| c.contains(id));
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if is_selected() {
                                        "configurator__option configurator__option--selected"
                                    } else {
                                        "configurator__option"
                                    }
                                }
                                aria-pressed=move || is_selected().to_string()
                                on:click=move |_| {
                                    config.update(|c| c.toggle(id));
                                    log::debug!("configurator: toggled product {}", id.value());
                                }
                            >
                                <span class="configurator__check">
                                    {move || is_selected().then(|| icon("check"))}
                                </span>
                                <span class="configurator__name">{name}</span>
                                <span class="configurator__price">{price}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <aside class="configurator__summary">
                <h3>"2. Your solution"</h3>
                <Show
                    when=move || { summary().item_count > 0 }
                    fallback=|| view! {
                        <p class="configurator__empty">"Select one or more devices to build your solution."</p>
                    }
                >
                    <ul class="configurator__selected">
                        {move || selected_names()
                            .into_iter()
                            .map(|name| view! { <li>{name}</li> })
                            .collect_view()}
                    </ul>
                    <p class="configurator__count">
                        {move || format!("{} device(s) selected", summary().item_count)}
                    </p>
                    <p class="configurator__total">
                        "Estimated hardware cost: "
                        <strong>{move || summary().total_label()}</strong>
                    </p>
                    <div class="configurator__actions">
                        <LinkButton href="/#contact">"Request a Quote"</LinkButton>
                        <Button
                            variant="ghost"
                            on_click=Callback::new(move |_: leptos::ev::MouseEvent| config.update(ProductConfiguration::clear))
                        >
                            "Clear"
                        </Button>
                    </div>
                </Show>
            </aside>
        </div>
    }
}
