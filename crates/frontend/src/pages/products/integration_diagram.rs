use crate::shared::icons::icon;
use leptos::prelude::*;

/// Слои схемы интеграции: (иконка, заголовок, элементы)
static LAYERS: [(&str, &str, &[&str]); 4] = [
    ("cpu", "Devices", &["Sensor Hub", "Condition Monitors", "Environmental Sensors"]),
    ("cloud", "Connectivity", &["Wi-Fi / Ethernet", "LoRaWAN", "4G / 5G"]),
    ("database", "NextWave Platform", &["Edge Analytics", "Data Lake", "AI Models"]),
    ("chart", "Your Systems", &["ERP & CRM", "SCADA", "Dashboards & Alerts"]),
];

/// Схема потока данных от устройств до систем клиента
#[component]
pub fn IntegrationDiagram() -> impl IntoView {
    view! {
        <div class="integration-diagram" role="img" aria-label="Data flows from devices through connectivity and the NextWave platform into your systems">
            {LAYERS
                .iter()
                .enumerate()
                .map(|(index, (icon_name, title, nodes))| view! {
                    <div class="integration-diagram__layer">
                        <div class="integration-diagram__icon">{icon(icon_name)}</div>
                        <h4 class="integration-diagram__title">{*title}</h4>
                        <ul class="integration-diagram__nodes">
                            {nodes.iter().map(|node| view! { <li>{*node}</li> }).collect_view()}
                        </ul>
                    </div>
                    {(index + 1 < LAYERS.len()).then(|| view! {
                        <span class="integration-diagram__arrow" aria-hidden="true">{icon("arrow-right")}</span>
                    })}
                })
                .collect_view()}
        </div>
    }
}
