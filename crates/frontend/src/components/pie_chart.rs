//! Pie chart with `name: NN%` labels.

use yew::prelude::*;

use crate::chart::{
    arc_path, label_position, palette_color, pie_slices, slice_label, slice_tooltip,
};

const SIZE: f64 = 400.0;
const RADIUS: f64 = 120.0;

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub title: AttrValue,
    /// (name, value) pairs
    pub entries: Vec<(String, f64)>,
}

#[function_component(PieChart)]
pub fn pie_chart(props: &PieChartProps) -> Html {
    let values: Vec<f64> = props.entries.iter().map(|(_, value)| *value).collect();
    let slices = pie_slices(&values);
    let center = SIZE / 2.0;

    let body = if slices.is_empty() {
        html! { <p class="empty">{"No spending recorded"}</p> }
    } else {
        let paths = slices.iter().zip(&props.entries).enumerate().map(|(i, (slice, (name, value)))| {
            let (lx, ly) = label_position(center, center, RADIUS, slice);
            let anchor = if lx < center { "end" } else { "start" };
            html! {
                <g>
                    <path d={arc_path(center, center, RADIUS, slice)} fill={palette_color(i)}>
                        <title>{ slice_tooltip(name, *value) }</title>
                    </path>
                    if slice.fraction > 0.0 {
                        <text class="chart-slice-label" x={lx.to_string()} y={ly.to_string()}
                            text-anchor={anchor}>
                            { slice_label(name, slice.fraction) }
                        </text>
                    }
                </g>
            }
        });
        html! {
            <svg class="chart" viewBox={format!("0 0 {SIZE} {SIZE}")}>
                { for paths }
            </svg>
        }
    };

    html! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">{ &props.title }</h2>
            </div>
            { body }
        </div>
    }
}
