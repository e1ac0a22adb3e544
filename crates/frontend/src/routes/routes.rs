use crate::layout::Shell;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::products::ProductsPage;
use crate::pages::solutions::SolutionsPage;
use crate::pages::use_cases::UseCasesPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/solutions") view=SolutionsPage />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/use-cases") view=UseCasesPage />
                </Routes>
            </Shell>
        </Router>
    }
}
