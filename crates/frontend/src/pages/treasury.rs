//! Treasury page: balance, top-up form and transaction history.

use api_client::{TreasuryView, settle_then};
use core_types::{TransactionKind, format_timestamp};
use web_types::{TopUpForm, fallback};
use yew::prelude::*;

use crate::components::{Loading, NoticeBanner, StatusBadge};
use crate::page_state::{PageAction, PageState};
use crate::pages::{not_ready, spawn_load, spawn_write};

#[function_component(TreasuryPage)]
pub fn treasury_page() -> Html {
    let state = use_reducer(PageState::<TreasuryView>::default);
    let show_form = use_state(|| false);
    let amount = use_state(String::new);

    let reload = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| {
            spawn_load(dispatcher.clone(), fallback::LOAD_TREASURY, |client| async move {
                client.treasury_view().await
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| reload.emit(()));
    }

    // Settlement is asynchronous on the server; re-read once after a fixed delay.
    let reload_after_settle = Callback::from(move |_: ()| {
        let reload = reload.clone();
        wasm_bindgen_futures::spawn_local(settle_then(gloo_timers::future::sleep, async move {
            reload.emit(())
        }));
    });

    let on_toggle_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(!*show_form))
    };

    let on_amount_input = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_submit = {
        let dispatcher = state.dispatcher();
        let amount = amount.clone();
        let show_form = show_form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = TopUpForm {
                amount: (*amount).clone(),
            };
            let request = match form.validate() {
                Ok(request) => request,
                Err(err) => {
                    dispatcher.dispatch(PageAction::Rejected(err.to_string()));
                    return;
                }
            };

            let amount = amount.clone();
            let show_form = show_form.clone();
            spawn_write(
                dispatcher.clone(),
                fallback::TOP_UP,
                move |client| async move { client.top_up(request.amount).await },
                move |response| {
                    amount.set(String::new());
                    show_form.set(false);
                    Some(response.display_message().to_string())
                },
                reload_after_settle.clone(),
            );
        })
    };

    let Some(view) = state.data() else {
        return not_ready(&*state);
    };
    let submitting = state.is_submitting();

    html! {
        <div>
            <div class="page-header">
                <h1 class="page-title">{"Treasury"}</h1>
                <button class="btn btn-primary" onclick={on_toggle_form}>
                    { if *show_form { "Cancel" } else { "+ Top Up" } }
                </button>
            </div>

            <NoticeBanner notice={state.notice().cloned()} />
            if state.is_refreshing() {
                <Loading message="Refreshing..." />
            }

            <div class="stats-grid">
                <div class="stat-card">
                    <div class="stat-label">{"Current Balance"}</div>
                    <div class="stat-value">{ &view.balance.balance_formatted }</div>
                </div>
            </div>

            if *show_form {
                <div class="card top-up-form">
                    <h2 class="card-title">{"Top Up Treasury"}</h2>
                    <form onsubmit={on_submit}>
                        <div class="form-group">
                            <label class="form-label">{"Amount (USDC)"}</label>
                            <input
                                class="form-input"
                                type="number"
                                step="0.01"
                                min="0"
                                placeholder="1000"
                                value={(*amount).clone()}
                                oninput={on_amount_input}
                                disabled={submitting}
                            />
                            <p class="form-hint">{"Starts a deposit; the balance updates once it settles."}</p>
                        </div>
                        <button class="btn btn-success" type="submit" disabled={submitting}>
                            { if submitting { "Processing..." } else { "Top Up" } }
                        </button>
                    </form>
                </div>
            }

            <div class="card">
                <h2 class="card-title">{"Transaction History"}</h2>
                if view.transactions.is_empty() {
                    <p class="empty">{"No transactions yet"}</p>
                } else {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Type"}</th>
                                <th>{"Amount"}</th>
                                <th>{"Date"}</th>
                                <th>{"Description"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for view.transactions.iter().map(|tx| html! {
                                <tr key={tx.id.clone()}>
                                    <td>
                                        <StatusBadge
                                            active={tx.kind == TransactionKind::Deposit}
                                            label={tx.kind.label()}
                                        />
                                    </td>
                                    <td>{ tx.signed_amount() }</td>
                                    <td>{ format_timestamp(&tx.timestamp) }</td>
                                    <td>{ tx.description_or_dash() }</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }
            </div>
        </div>
    }
}
