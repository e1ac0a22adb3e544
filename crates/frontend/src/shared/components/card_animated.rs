//! CardAnimated: обёртка над Thaw Card с анимацией появления.
//!
//! Карточки каталога (продукты, кейсы, статьи) появляются каскадом:
//! задержка растёт с индексом карточки в сетке.
//!
//! # Пример
//! ```ignore
//! <CardAnimated delay_ms=stagger_delay(index) on_click=open_details>
//!     <ProductCardBody product=product />
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Шаг каскадной задержки между соседними карточками, мс
pub const STAGGER_STEP_MS: u32 = 100;

/// Задержка появления карточки с индексом `index`
pub fn stagger_delay(index: usize) -> u32 {
    // Длинные списки не должны ждать секундами
    (index.min(10) as u32) * STAGGER_STEP_MS
}

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
///
/// # Props
/// - `delay_ms`: задержка анимации в мс (по умолчанию `0`).
/// - `class`: дополнительный CSS-класс контейнера.
/// - `on_click`: делает карточку кликабельной (открытие подробностей).
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительный CSS-класс.
    #[prop(optional, into)]
    class: String,
    /// Клик по карточке.
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.5s ease-out {}ms both;", delay_ms);
    let clickable = on_click.is_some();
    let container_class = match (clickable, class.is_empty()) {
        (true, true) => "card card--clickable".to_string(),
        (true, false) => format!("card card--clickable {}", class),
        (false, true) => "card".to_string(),
        (false, false) => format!("card {}", class),
    };

    view! {
        <div
            class=container_class
            role=clickable.then_some("button")
            tabindex=clickable.then_some("0")
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
            on:keydown=move |ev| {
                if let Some(handler) = on_click {
                    if ev.key() == "Enter" {
                        handler.run(());
                    }
                }
            }
        >
            <Card attr:style=style>
                {children()}
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(3), 300);
        assert_eq!(stagger_delay(50), 1000);
    }
}
