//! BossBoard Dashboard - Yew WASM Frontend
//!
//! Five pages over the BossBoard REST API: dashboard, departments,
//! workers, treasury and analytics.

mod app;
mod chart;
mod components;
mod config;
mod console;
mod page_state;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
