use std::fmt::Display;

use gloo_timers::callback::Timeout;

/// Write a failure to the browser console outside the current render.
pub fn log_error(context: &str, error: &dyn Display) {
    let line = format!("{context}: {error}");
    Timeout::new(0, move || {
        web_sys::console::error_1(&line.into());
    })
    .forget();
}
