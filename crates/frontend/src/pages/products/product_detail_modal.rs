use crate::shared::components::ui::{Badge, LinkButton};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a101_product::Product;
use leptos::prelude::*;

#[component]
pub fn ProductDetailModal(product: Product, on_close: Callback<()>) -> impl IntoView {
    let title = product.name.clone();
    let model = product.model_code().to_string();
    let availability = product.availability_label();
    let stock_variant = if product.in_stock { "success" } else { "neutral" };

    view! {
        <Modal
            title=title
            on_close=on_close
            footer=|| view! { <LinkButton href="/#contact">"Request a Quote"</LinkButton> }
        >
            <div class="product-detail">
                <div class="product-detail__media">
                    <img src=product.image alt=product.name />
                </div>
                <div class="product-detail__summary">
                    <div class="product-detail__meta">
                        <span class="product-detail__model">{model}</span>
                        <Badge variant=stock_variant>{availability}</Badge>
                    </div>
                    <p>{product.description}</p>
                    <p class="product-detail__price">{product.price}</p>
                </div>

                <div class="product-detail__section">
                    <h3>"Key Features"</h3>
                    <ul class="check-list">
                        {product
                            .features
                            .into_iter()
                            .map(|feature| view! { <li>{icon("check")}<span>{feature}</span></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div class="product-detail__section">
                    <h3>"Technical Specifications"</h3>
                    <table class="spec-table">
                        <tbody>
                            {product
                                .specifications
                                .into_iter()
                                .map(|spec| view! {
                                    <tr>
                                        <th scope="row">{spec.label}</th>
                                        <td>{spec.value}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>

                <div class="product-detail__section">
                    <h3>"Applications"</h3>
                    <div class="badge-row">
                        {product
                            .applications
                            .into_iter()
                            .map(|application| view! { <Badge>{application}</Badge> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Modal>
    }
}
