//! Multi-series line chart drawn as inline SVG.

use yew::prelude::*;

use crate::chart::{Bounds, Plot, point_tooltip};
use core_types::format_usd;

const TICKS: usize = 5;

/// One line of the chart.
#[derive(Clone, PartialEq)]
pub struct Series {
    pub name: AttrValue,
    pub color: &'static str,
    pub values: Vec<f64>,
}

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub title: AttrValue,
    /// X-axis labels, one per point
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let plot = Plot::default();
    let bounds = Bounds::of(props.series.iter().map(|s| s.values.as_slice()));
    let count = props.labels.len();

    let grid = bounds.ticks(TICKS).into_iter().map(|tick| {
        let y = plot.y(tick, bounds);
        html! {
            <g>
                <line class="chart-grid" x1={plot.padding.to_string()} y1={y.to_string()}
                    x2={(plot.width - plot.padding).to_string()} y2={y.to_string()} />
                <text class="chart-axis-label" x={(plot.padding - 8.0).to_string()}
                    y={(y + 4.0).to_string()} text-anchor="end">
                    { format_usd(tick) }
                </text>
            </g>
        }
    });

    let x_labels = props.labels.iter().enumerate().map(|(i, label)| {
        html! {
            <text class="chart-axis-label" x={plot.x(i, count).to_string()}
                y={(plot.height - plot.padding + 20.0).to_string()} text-anchor="middle">
                { label }
            </text>
        }
    });

    let lines = props.series.iter().map(|series| {
        let points = series.values.iter().enumerate().map(|(i, value)| {
            let label = props.labels.get(i).map(String::as_str).unwrap_or_default();
            html! {
                <circle cx={plot.x(i, series.values.len()).to_string()}
                    cy={plot.y(*value, bounds).to_string()} r="4" fill={series.color}>
                    <title>{ point_tooltip(label, &series.name, *value) }</title>
                </circle>
            }
        });
        html! {
            <g>
                <polyline class="chart-line" fill="none" stroke={series.color} stroke-width="2"
                    points={plot.polyline(&series.values, bounds)} />
                { for points }
            </g>
        }
    });

    html! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">{ &props.title }</h2>
            </div>
            if count == 0 {
                <p class="empty">{"No data yet"}</p>
            } else {
                <svg class="chart" viewBox={format!("0 0 {} {}", plot.width, plot.height)}>
                    { for grid }
                    { for x_labels }
                    { for lines }
                </svg>
                <div class="chart-legend">
                    { for props.series.iter().map(|series| html! {
                        <span>
                            <span class="chart-legend-swatch" style={format!("background: {}", series.color)}></span>
                            { &series.name }
                        </span>
                    })}
                </div>
            }
        </div>
    }
}
