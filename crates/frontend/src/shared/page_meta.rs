use contracts::shared::config::site_config;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

/// Заголовок вкладки и SEO-теги страницы
#[component]
pub fn PageMeta(
    #[prop(into)]
    title: String,
    #[prop(into)]
    description: String,
    #[prop(optional, into)]
    keywords: Option<String>,
    /// Путь страницы для og:url, например "/products"
    #[prop(optional, into)]
    path: Option<String>,
) -> impl IntoView {
    let site = &site_config().site;
    let url = format!("{}{}", site.base_url, path.unwrap_or_default());

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=description.clone() />
        {keywords.map(|k| view! { <Meta name="keywords" content=k /> })}
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=url />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=description />
        <Meta property="og:locale" content=site.locale.replace('-', "_") />
    }
}
