//! Страница IoT-продуктов: фильтр по категории, карточки, модальное окно
//! с подробностями и конфигуратор.

mod configurator;
mod integration_diagram;
mod product_card;
mod product_detail_modal;

use configurator::ProductConfigurator;
use integration_diagram::IntegrationDiagram;
use product_card::ProductCard;
use product_detail_modal::ProductDetailModal;

use crate::shared::catalog_state::{CategoryFilter, Selection};
use crate::shared::components::ui::LinkButton;
use crate::shared::components::{CategoryFilterBar, EmptyState, LoadError, PageHero, SectionHeader};
use crate::shared::icons::icon;
use crate::shared::page_meta::PageMeta;
use contracts::domain::a101_product::Product;
use contracts::pages::load_products_page;
use leptos::prelude::*;

/// Панели интеграции: (иконка, заголовок, пункты)
static INTEGRATION_PANELS: [(&str, &str, [&str; 5]); 2] = [
    (
        "code",
        "API & Connectivity",
        [
            "RESTful API for data access and device control",
            "MQTT protocol for efficient IoT communication",
            "Webhook support for event-driven integration",
            "Secure WebSocket connections for real-time data",
            "SDK available for custom integration development",
        ],
    ),
    (
        "database",
        "System Compatibility",
        [
            "ERP systems (SAP, Oracle, Microsoft Dynamics)",
            "SCADA and industrial control systems",
            "Building management systems",
            "Cloud platforms (AWS IoT, Azure IoT, Google Cloud IoT)",
            "Custom and legacy systems via adaptable connectors",
        ],
    ),
];

/// Блок "Deployment & Support": (иконка, заголовок, текст)
static SUPPORT_SERVICES: [(&str, &str, &str); 3] = [
    (
        "settings",
        "Installation Services",
        "Professional installation by our certified technicians ensures your IoT devices are properly set up and configured for optimal performance.",
    ),
    (
        "users",
        "Training & Onboarding",
        "Comprehensive training for your team on device operation, data interpretation, and system management to maximize your IoT investment.",
    ),
    (
        "support",
        "Ongoing Support",
        "24/7 technical support, regular maintenance, firmware updates, and performance optimization to ensure your IoT ecosystem runs smoothly.",
    ),
];

#[component]
pub fn ProductsPage() -> impl IntoView {
    let content = match load_products_page() {
        Ok(props) => view! { <ProductsContent props=props /> }.into_any(),
        Err(e) => {
            log::error!("products page: {:#}", e);
            view! { <LoadError error=format!("{:#}", e) /> }.into_any()
        }
    };

    view! {
        <PageMeta
            title="IoT Products"
            description="Explore NextWave's range of IoT products including sensors, smart infrastructure, industrial automation, and environmental monitoring solutions."
            keywords="IoT products, smart devices, sensors, industrial automation, environmental monitoring, Australia"
            path="/products"
        />
        {content}
    }
}

#[component]
fn ProductsContent(props: contracts::pages::ProductsPageProps) -> impl IntoView {
    let contracts::pages::ProductsPageProps {
        product_categories,
        products,
        ..
    } = props;

    let filter = CategoryFilter::new(&product_categories);
    let selection = Selection::<Product>::new();
    let catalog = StoredValue::new(products);

    let filtered = Memo::new(move |_| catalog.with_value(|items| filter.apply(items)));

    let open_details = move |product: Product| {
        log::debug!("product details: {}", product.model_code());
        selection.select(product);
    };

    view! {
        <PageHero
            title="Smart Devices for Connected Businesses"
            lead="Transform your physical operations with NextWave's IoT ecosystem. Our smart devices collect real-time data, automate processes, and integrate seamlessly with your existing systems."
            background="/images/iot-background-pattern.svg"
            tone="secondary"
        >
            <LinkButton href="#products">"Explore Products"</LinkButton>
            <LinkButton href="#integration" variant="secondary">"View Integration Options"</LinkButton>
        </PageHero>

        // Product range
        <section id="products" class="section">
            <div class="container">
                <SectionHeader
                    title="Our IoT Product Range"
                    subtitle="From data collection sensors to complete smart infrastructure solutions, our IoT products are designed for reliability, security, and seamless integration."
                />
                <CategoryFilterBar categories=product_categories filter=filter label="Product categories" />

                <div class="grid grid--3 catalog-grid">
                    {move || {
                        filtered
                            .get()
                            .items
                            .into_iter()
                            .enumerate()
                            .map(|(index, product)| {
                                let on_open = Callback::new(move |p: Product| open_details(p));
                                view! { <ProductCard product=product index=index on_open=on_open /> }
                            })
                            .collect_view()
                    }}
                </div>

                <Show when=move || filtered.with(|f| f.is_empty_state())>
                    <EmptyState
                        message="No products found in this category. Please try another category or contact us for custom solutions."
                        reset_label="View All Products"
                        on_reset=Callback::new(move |_| filter.reset())
                    />
                </Show>
            </div>
        </section>

        // Integration
        <section id="integration" class="section section--neutral">
            <div class="container">
                <SectionHeader
                    title="Seamless Integration Ecosystem"
                    subtitle="Our IoT products work together to create a comprehensive data collection and automation network that integrates with your existing systems."
                />
                <IntegrationDiagram />
                <div class="grid grid--2">
                    {INTEGRATION_PANELS
                        .iter()
                        .map(|(icon_name, title, points)| view! {
                            <div class="spec-panel">
                                <h3 class="spec-panel__title">
                                    {icon(icon_name)}
                                    <span>{*title}</span>
                                </h3>
                                <ul class="spec-panel__list">
                                    {points
                                        .iter()
                                        .map(|point| view! { <li><span class="spec-panel__dot"></span>{*point}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        // Configurator
        <section class="section">
            <div class="container">
                <SectionHeader
                    title="Configure Your IoT Solution"
                    subtitle="Use our interactive configurator to build a custom IoT solution tailored to your specific business needs."
                />
                <ProductConfigurator catalog=catalog />
            </div>
        </section>

        // Deployment & support
        <section class="section section--muted">
            <div class="container">
                <SectionHeader title="Deployment & Support" />
                <div class="grid grid--3">
                    {SUPPORT_SERVICES
                        .iter()
                        .map(|(icon_name, title, text)| view! {
                            <div class="service-card">
                                <div class="service-card__icon">{icon(icon_name)}</div>
                                <h3 class="card__title">{*title}</h3>
                                <p class="card__text">{*text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class="section__footer">
                    <LinkButton href="/#contact">"Request Support Information"</LinkButton>
                </div>
            </div>
        </section>

        // Detail modal
        {move || {
            selection.displayed().map(|product| view! {
                <ProductDetailModal product=product on_close=Callback::new(move |_| selection.close()) />
            })
        }}
    }
}
