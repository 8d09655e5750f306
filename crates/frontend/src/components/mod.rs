//! Reusable UI components.

mod line_chart;
mod loading;
mod notice_banner;
mod pie_chart;
mod stat_card;
mod status_badge;

pub use line_chart::{LineChart, Series};
pub use loading::Loading;
pub use notice_banner::NoticeBanner;
pub use pie_chart::PieChart;
pub use stat_card::{StatCard, Tone};
pub use status_badge::StatusBadge;
