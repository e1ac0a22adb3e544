use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use contracts::shared::config::site_config;
use leptos::prelude::*;
use leptos_router::components::A;

/// Пункты главного меню: (путь, заголовок)
static NAV_ITEMS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/solutions", "Solutions"),
    ("/products", "Products"),
    ("/use-cases", "Use Cases"),
];

#[component]
pub fn Header() -> impl IntoView {
    let mobile_open = RwSignal::new(false);
    let brand = site_config().site.name.clone();

    let nav_links = move |class: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|(href, label)| {
                view! {
                    <A href=*href exact=true attr:class=class on:click=move |_| mobile_open.set(false)>
                        {*label}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content container">
                <A href="/" attr:class="header__brand">
                    <span class="header__logo" aria-hidden="true">{icon("cpu")}</span>
                    <span class="header__title">{brand}</span>
                </A>

                <nav class="header__nav" aria-label="Main">
                    {nav_links("header__link")}
                </nav>

                <div class="header__actions">
                    <ThemeToggle />
                    <A href="/#contact" attr:class="btn-primary header__cta">"Contact Us"</A>
                    <button
                        type="button"
                        class="header__menu-toggle"
                        aria-label="Toggle menu"
                        aria-expanded=move || mobile_open.get().to_string()
                        on:click=move |_| mobile_open.update(|open| *open = !*open)
                    >
                        {move || if mobile_open.get() { icon("x") } else { icon("menu") }}
                    </button>
                </div>
            </div>

            <Show when=move || mobile_open.get()>
                <nav class="header__mobile-nav" aria-label="Mobile">
                    {nav_links("header__mobile-link")}
                </nav>
            </Show>
        </header>
    }
}
