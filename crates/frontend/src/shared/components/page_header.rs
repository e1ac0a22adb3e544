use leptos::prelude::*;

/// SectionHeader component - centered heading for page sections
#[component]
pub fn SectionHeader(
    /// Section title (required)
    #[prop(into)]
    title: String,

    /// Optional lead paragraph under the title
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-header__title">{title}</h2>
            {move || subtitle.get().map(|s| view! {
                <p class="section-header__subtitle">{s}</p>
            })}
        </div>
    }
}

/// PageHero component - gradient hero block at the top of inner pages
#[component]
pub fn PageHero(
    #[prop(into)]
    title: String,
    #[prop(into)]
    lead: String,
    /// Background pattern image
    #[prop(into)]
    background: String,
    /// Gradient modifier: "primary" or "secondary"
    #[prop(optional, into)]
    tone: MaybeProp<String>,
    /// Buttons or stat boxes under the lead text
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let hero_class = move || match tone.get().as_deref() {
        Some("secondary") => "page-hero page-hero--secondary",
        _ => "page-hero page-hero--primary",
    };

    view! {
        <section class=hero_class>
            <div class="page-hero__pattern">
                <img src=background alt="" aria-hidden="true" />
            </div>
            <div class="container page-hero__content">
                <h1 class="page-hero__title fade-up">{title}</h1>
                <p class="page-hero__lead fade-up fade-up--delay-1">{lead}</p>
                {children.map(|c| view! {
                    <div class="page-hero__actions fade-up fade-up--delay-2">{c()}</div>
                })}
            </div>
        </section>
    }
}
