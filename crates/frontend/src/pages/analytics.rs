//! Analytics page.

use core_types::{AnalyticsData, TrendPoint, format_usd};
use web_types::fallback;
use yew::prelude::*;

use crate::chart::palette_color;
use crate::components::{LineChart, PieChart, Series, StatCard};
use crate::page_state::PageState;
use crate::pages::{not_ready, spawn_load};

fn trend_chart(title: &'static str, name: &'static str, color: &'static str, trend: &[TrendPoint]) -> Html {
    let labels: Vec<String> = trend.iter().map(|p| p.date.clone()).collect();
    let series = vec![Series {
        name: name.into(),
        color,
        values: trend.iter().map(|p| p.amount).collect(),
    }];
    html! { <LineChart {title} {labels} {series} /> }
}

#[function_component(AnalyticsPage)]
pub fn analytics_page() -> Html {
    let state = use_reducer(PageState::<AnalyticsData>::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            spawn_load(dispatcher, fallback::LOAD_ANALYTICS, |client| async move {
                client.analytics().await
            });
        });
    }

    let Some(data) = state.data() else {
        return not_ready(&*state);
    };

    let spend: Vec<(String, f64)> = data
        .spend_per_department
        .iter()
        .map(|d| (d.name.clone(), d.value))
        .collect();

    html! {
        <div>
            <h1 class="page-title">{"Analytics"}</h1>

            <div class="stats-grid">
                <StatCard
                    label="Most Expensive Department"
                    value={data.most_expensive_department.clone()}
                />
                <StatCard label="Total Employees" value={data.total_employees.to_string()} />
                <StatCard label="Average Salary" value={format_usd(data.average_salary)} />
            </div>

            <PieChart title="Spend per Department" entries={spend} />
            { trend_chart("Payroll Trend Over Time", "Payroll", palette_color(1), &data.payroll_trend) }
            { trend_chart("Profit Over Time", "Profit", palette_color(5), &data.profit_trend) }
        </div>
    }
}
