use contracts::domain::a103_use_case::ResultMetric;
use leptos::prelude::*;

/// Крупное значение с подписью в hero-блоке ("98%" / "Accuracy Rate")
#[component]
pub fn StatBox(
    #[prop(into)]
    value: String,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <div class="stat-box">
            <span class="stat-box__value">{value}</span>
            <span class="stat-box__label">{label}</span>
        </div>
    }
}

/// Сетка показателей результата внедрения
#[component]
pub fn ResultsMetrics(metrics: Vec<ResultMetric>) -> impl IntoView {
    view! {
        <div class="results-metrics">
            {metrics
                .into_iter()
                .map(|metric| {
                    view! {
                        <div class="results-metrics__item">
                            <span class="results-metrics__value">{metric.value}</span>
                            <span class="results-metrics__label">{metric.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
