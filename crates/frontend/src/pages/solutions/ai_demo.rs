//! Демонстрация AI-решений.
//!
//! Бэкенда у демо нет: сценарии и "результаты анализа" заданы статически,
//! переключение сценариев идёт через то же состояние вкладок, что и на странице.

use crate::shared::catalog_state::Tabs;
use crate::shared::icons::icon;
use leptos::prelude::*;

struct DemoScenario {
    label: &'static str,
    input: &'static str,
    insights: [&'static str; 3],
}

static SCENARIOS: [DemoScenario; 3] = [
    DemoScenario {
        label: "Demand Forecast",
        input: "12 months of daily sales for 240 SKUs across 8 stores",
        insights: [
            "Seasonal peak expected in 6 weeks (+32% volume)",
            "14 SKUs at risk of stock-out within 10 days",
            "Forecast accuracy on the hold-out period: 94%",
        ],
    },
    DemoScenario {
        label: "Equipment Health",
        input: "Vibration and temperature telemetry from 36 production-line motors",
        insights: [
            "Motor M-17 shows bearing wear pattern, service within 9 days",
            "Two motors running 8°C above baseline",
            "Projected downtime avoided this quarter: 41 hours",
        ],
    },
    DemoScenario {
        label: "Document Processing",
        input: "1,200 scanned supplier invoices (PDF)",
        insights: [
            "1,164 invoices extracted automatically (97%)",
            "36 flagged for review: mismatched ABN or totals",
            "Average processing time: 4 seconds per invoice",
        ],
    },
];

#[component]
pub fn AiDemo() -> impl IntoView {
    let tabs = Tabs::new(SCENARIOS.len());

    view! {
        <div class="ai-demo">
            <div class="ai-demo__scenarios" role="tablist" aria-label="Demo scenarios">
                {SCENARIOS
                    .iter()
                    .enumerate()
                    .map(|(index, scenario)| view! {
                        <button
                            type="button"
                            role="tab"
                            class=move || if tabs.is_active(index) { "ai-demo__scenario ai-demo__scenario--active" } else { "ai-demo__scenario" }
                            aria-selected=move || tabs.is_active(index).to_string()
                            on:click=move |_| { tabs.set_active(index); }
                        >
                            {scenario.label}
                        </button>
                    })
                    .collect_view()}
            </div>
            {move || {
                SCENARIOS.get(tabs.active_index()).map(|scenario| view! {
                    <div class="ai-demo__panel" role="tabpanel">
                        <div class="ai-demo__input">
                            <h4>"Input data"</h4>
                            <p>{scenario.input}</p>
                        </div>
                        <div class="ai-demo__output">
                            <h4>"AI insights"</h4>
                            <ul class="check-list">
                                {scenario
                                    .insights
                                    .iter()
                                    .map(|insight| view! { <li>{icon("check")}<span>{*insight}</span></li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                })
            }}
            <p class="ai-demo__note">"Sample data shown. Book a full demo to see results on your own data."</p>
        </div>
    }
}
