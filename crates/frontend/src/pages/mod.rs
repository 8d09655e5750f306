//! Page components.
//!
//! Every page fetches its own data on mount through `spawn_load` and keeps
//! it in a `PageState` reducer. Nothing is shared between pages.

mod analytics;
mod dashboard;
mod departments;
mod treasury;
mod workers;

pub use analytics::AnalyticsPage;
pub use dashboard::DashboardPage;
pub use departments::DepartmentsPage;
pub use treasury::TreasuryPage;
pub use workers::WorkersPage;

use std::future::Future;

use api_client::BossBoardClient;
use yew::prelude::*;

use crate::components::Loading;
use crate::config;
use crate::console;
use crate::page_state::{PageAction, PageState};

/// Fetch a page's data and feed the outcome into its reducer.
///
/// Failures become `fallback` unless the server sent a detail.
pub(crate) fn spawn_load<T, F, Fut>(
    dispatcher: UseReducerDispatcher<PageState<T>>,
    fallback: &'static str,
    fetch: F,
) where
    T: Clone + 'static,
    F: FnOnce(BossBoardClient) -> Fut + 'static,
    Fut: Future<Output = api_client::Result<T>> + 'static,
{
    dispatcher.dispatch(PageAction::Reload);
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch(config::api_client()).await.map_err(|e| {
            console::log_error(fallback, &e);
            e.user_message(fallback)
        });
        dispatcher.dispatch(PageAction::Loaded(result));
    });
}

/// Send a write and report the outcome to the reducer, reloading on success.
pub(crate) fn spawn_write<T, R, F, Fut>(
    dispatcher: UseReducerDispatcher<PageState<T>>,
    fallback: &'static str,
    write: F,
    on_success: impl FnOnce(R) -> Option<String> + 'static,
    reload: Callback<()>,
) where
    T: Clone + 'static,
    R: 'static,
    F: FnOnce(BossBoardClient) -> Fut + 'static,
    Fut: Future<Output = api_client::Result<R>> + 'static,
{
    dispatcher.dispatch(PageAction::Submit);
    wasm_bindgen_futures::spawn_local(async move {
        match write(config::api_client()).await {
            Ok(response) => {
                dispatcher.dispatch(PageAction::Succeeded(on_success(response)));
                reload.emit(());
            }
            Err(e) => {
                console::log_error(fallback, &e);
                dispatcher.dispatch(PageAction::Rejected(e.user_message(fallback)));
            }
        }
    });
}

/// Loading spinner or full-page error for a page that is not ready.
pub(crate) fn not_ready<T: Clone>(state: &PageState<T>) -> Html {
    match state {
        PageState::Failed(message) => html! {
            <div class="card">
                <div class="error">{ message }</div>
            </div>
        },
        _ => html! { <Loading /> },
    }
}
