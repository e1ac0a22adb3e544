use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;
use contracts::shared::config::site_config;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Html, Title};

#[component]
pub fn App() -> impl IntoView {
    // Head tags (<title>, <meta>) from pages are collected here
    provide_meta_context();

    let site = &site_config().site;
    let lang = site.locale.clone();
    let name = site.name.clone();

    view! {
        <Html attr:lang=lang />
        <Title formatter=move |text: String| {
            if text.is_empty() { name.clone() } else { format!("{} | {}", text, name) }
        } />
        <ThemeProvider>
            <AppRoutes />
        </ThemeProvider>
    }
}
