//! Statistics card component.

use yew::prelude::*;

/// Colouring of a stat value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Positive,
    Negative,
}

impl Tone {
    /// Positive for values at or above zero, negative otherwise.
    pub fn of_sign(value: f64) -> Self {
        if value >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }

    fn class(self) -> Option<&'static str> {
        match self {
            Tone::Neutral => None,
            Tone::Positive => Some("positive"),
            Tone::Negative => Some("negative"),
        }
    }
}

/// Properties for StatCard component.
#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub value: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub tone: Tone,
}

/// Statistics card component.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat-card">
            <div class="stat-label">{ &props.label }</div>
            <div class={classes!("stat-value", props.tone.class())}>{ &props.value }</div>
        </div>
    }
}
