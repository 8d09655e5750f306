//! Active/inactive badge.

use core_types::status_label;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub active: bool,
    /// Overrides the Active/Inactive text
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let class = if props.active {
        "badge badge-active"
    } else {
        "badge badge-inactive"
    };
    let label = props
        .label
        .clone()
        .unwrap_or_else(|| AttrValue::Static(status_label(props.active)));

    html! { <span class={class}>{ label }</span> }
}
