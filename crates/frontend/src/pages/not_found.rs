use crate::shared::components::ui::LinkButton;
use crate::shared::page_meta::PageMeta;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageMeta
            title="Page Not Found"
            description="The page you are looking for does not exist."
        />
        <section class="not-found container">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"Sorry, we couldn't find the page you were looking for."</p>
            <LinkButton href="/">"Back to Home"</LinkButton>
        </section>
    }
}
