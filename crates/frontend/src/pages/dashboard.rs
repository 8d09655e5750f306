//! Dashboard page: treasury and this month's figures at a glance.

use core_types::{DashboardStats, format_percent, format_usd};
use web_types::fallback;
use yew::prelude::*;

use crate::chart::palette_color;
use crate::components::{LineChart, Series, StatCard, Tone};
use crate::page_state::PageState;
use crate::pages::{not_ready, spawn_load};

/// Label, formatted value and tone of each headline card, in display order.
fn headline_cards(stats: &DashboardStats) -> Vec<(&'static str, String, Tone)> {
    vec![
        ("Treasury Balance", format_usd(stats.treasury_balance), Tone::Neutral),
        ("Revenue This Month", format_usd(stats.revenue_this_month), Tone::Positive),
        ("Payroll This Month", format_usd(stats.payroll_this_month), Tone::Negative),
        ("Profit", format_usd(stats.profit), Tone::of_sign(stats.profit)),
        ("Margin", format_percent(stats.margin), Tone::of_sign(stats.margin)),
    ]
}

/// Dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let state = use_reducer(PageState::<DashboardStats>::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            spawn_load(dispatcher, fallback::LOAD_DASHBOARD, |client| async move {
                client.dashboard_stats().await
            });
        });
    }

    let Some(stats) = state.data() else {
        return not_ready(&*state);
    };

    let labels: Vec<String> = stats.revenue_vs_payroll.iter().map(|p| p.date.clone()).collect();
    let series = vec![
        Series {
            name: "Revenue".into(),
            color: palette_color(0),
            values: stats.revenue_vs_payroll.iter().map(|p| p.revenue).collect(),
        },
        Series {
            name: "Payroll".into(),
            color: palette_color(1),
            values: stats.revenue_vs_payroll.iter().map(|p| p.payroll).collect(),
        },
    ];

    html! {
        <div>
            <h1 class="page-title">{"Dashboard"}</h1>

            <div class="stats-grid">
                { for headline_cards(stats).into_iter().map(|(label, value, tone)| html! {
                    <StatCard {label} {value} {tone} />
                })}
            </div>

            <LineChart title="Revenue vs Payroll" {labels} {series} />
        </div>
    }
}
