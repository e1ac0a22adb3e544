use crate::shared::catalog_state::CategoryFilter;
use contracts::domain::common::Category;
use leptos::prelude::*;

/// CategoryFilterBar component - row of category chips above a catalog grid
///
/// Used by the products page (product categories) and the use-cases page (industries).
#[component]
pub fn CategoryFilterBar(
    /// Categories in display order, including the "all" entry
    categories: Vec<Category>,

    /// Page filter state
    filter: CategoryFilter,

    /// Accessible label for the chip group
    #[prop(optional, into)]
    label: String,
) -> impl IntoView {
    view! {
        <div class="category-filter" role="group" aria-label=label>
            {categories
                .into_iter()
                .map(|category| view! { <FilterChip category=category filter=filter /> })
                .collect_view()}
        </div>
    }
}

/// FilterChip component - individual category chip
#[component]
fn FilterChip(category: Category, filter: CategoryFilter) -> impl IntoView {
    let key = StoredValue::new(category.id);
    let is_active = move || key.with_value(|k| filter.is_active(k));

    view! {
        <button
            type="button"
            class=move || {
                if is_active() {
                    "category-filter__chip category-filter__chip--active"
                } else {
                    "category-filter__chip"
                }
            }
            aria-pressed=move || is_active().to_string()
            on:click=move |_| {
                key.with_value(|k| filter.select(k));
            }
        >
            {category.name}
        </button>
    }
}
