use crate::shared::components::ui::Badge;
use crate::shared::components::{stagger_delay, CardAnimated};
use crate::shared::icons::icon;
use contracts::domain::a101_product::Product;
use leptos::prelude::*;

#[component]
pub fn ProductCard(product: Product, index: usize, on_open: Callback<Product>) -> impl IntoView {
    let stock_variant = if product.in_stock { "success" } else { "neutral" };
    let availability = product.availability_label();
    let details = StoredValue::new(product.clone());

    view! {
        <CardAnimated
            delay_ms=stagger_delay(index)
            class="product-card"
            on_click=Callback::new(move |_| on_open.run(details.get_value()))
        >
            <img class="product-card__image" src=product.image alt=product.name.clone() loading="lazy" />
            <div class="product-card__header">
                <h3 class="card__title">{product.name}</h3>
                <Badge variant=stock_variant>{availability}</Badge>
            </div>
            <p class="card__text">{product.description}</p>
            <ul class="product-card__features">
                {product
                    .features
                    .into_iter()
                    .take(3)
                    .map(|feature| view! { <li>{icon("check")}<span>{feature}</span></li> })
                    .collect_view()}
            </ul>
            <div class="product-card__footer">
                <span class="product-card__price">{product.price}</span>
                <span class="product-card__more">"View Details" {icon("arrow-right")}</span>
            </div>
        </CardAnimated>
    }
}
