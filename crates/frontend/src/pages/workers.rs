//! Workers page: roster, creation form and status toggles.

use api_client::WorkersView;
use core_types::{Worker, shorten_wallet};
use web_types::{WorkerForm, fallback, forms::NO_DEPARTMENT};
use yew::prelude::*;

use crate::components::{Loading, NoticeBanner, StatusBadge};
use crate::page_state::{PageAction, PageState};
use crate::pages::{not_ready, spawn_load, spawn_write};

/// Input handler writing one text field of the form.
fn on_field(form: &UseStateHandle<WorkerForm>, update: fn(&mut WorkerForm, String)) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        update(&mut next, input.value());
        form.set(next);
    })
}

#[function_component(WorkersPage)]
pub fn workers_page() -> Html {
    let state = use_reducer(PageState::<WorkersView>::default);
    let show_form = use_state(|| false);
    let form = use_state(WorkerForm::default);

    let reload = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| {
            spawn_load(dispatcher.clone(), fallback::LOAD_WORKERS, |client| async move {
                client.workers_view().await
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| reload.emit(()));
    }

    let on_toggle_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(!*show_form))
    };

    let on_department_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            form.set(WorkerForm {
                department_id: select.value().parse().unwrap_or(NO_DEPARTMENT),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let dispatcher = state.dispatcher();
        let form = form.clone();
        let show_form = show_form.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let body = match form.validate() {
                Ok(body) => body,
                Err(err) => {
                    dispatcher.dispatch(PageAction::Rejected(err.to_string()));
                    return;
                }
            };

            let form = form.clone();
            let show_form = show_form.clone();
            spawn_write(
                dispatcher.clone(),
                fallback::ADD_WORKER,
                move |client| async move { client.create_worker(&body).await },
                move |_created| {
                    form.set(WorkerForm::default());
                    show_form.set(false);
                    None
                },
                reload.clone(),
            );
        })
    };

    let on_toggle_status = {
        let dispatcher = state.dispatcher();
        Callback::from(move |worker: Worker| {
            spawn_write(
                dispatcher.clone(),
                fallback::UPDATE_WORKER_STATUS,
                move |client| async move { client.toggle_worker(&worker).await },
                |_updated| None,
                reload.clone(),
            );
        })
    };

    let Some(view) = state.data() else {
        return not_ready(&*state);
    };
    let submitting = state.is_submitting();
    let can_toggle = state.accepts_writes();

    html! {
        <div>
            <div class="page-header">
                <h1 class="page-title">{"Workers"}</h1>
                <button class="btn btn-primary" onclick={on_toggle_form}>
                    { if *show_form { "Cancel" } else { "+ Add Worker" } }
                </button>
            </div>

            <NoticeBanner notice={state.notice().cloned()} />
            if state.is_refreshing() {
                <Loading message="Refreshing..." />
            }

            if *show_form {
                <div class="card">
                    <h2 class="card-title">{"Add New Worker"}</h2>
                    <form onsubmit={on_submit}>
                        <div class="form-group">
                            <label class="form-label">{"Name"}</label>
                            <input class="form-input" type="text" placeholder="Full name"
                                value={form.name.clone()}
                                oninput={on_field(&form, |f, v| f.name = v)}
                                disabled={submitting} />
                        </div>
                        <div class="form-group">
                            <label class="form-label">{"Department"}</label>
                            <select class="form-input" onchange={on_department_change} disabled={submitting}>
                                <option value={NO_DEPARTMENT.to_string()}
                                    selected={form.department_id == NO_DEPARTMENT}>
                                    {"Select a department"}
                                </option>
                                { for view.active_departments().map(|department| html! {
                                    <option
                                        value={department.id.to_string()}
                                        selected={form.department_id == department.id}
                                    >
                                        { &department.name }
                                    </option>
                                })}
                            </select>
                        </div>
                        <div class="form-group">
                            <label class="form-label">{"Wallet Address"}</label>
                            <input class="form-input mono" type="text" placeholder="0x..."
                                value={form.wallet.clone()}
                                oninput={on_field(&form, |f, v| f.wallet = v)}
                                disabled={submitting} />
                            <p class="form-hint">{"0x followed by 40 hex characters"}</p>
                        </div>
                        <div class="form-group">
                            <label class="form-label">{"Monthly Salary (USDC)"}</label>
                            <input class="form-input" type="number" step="0.01" min="0"
                                placeholder="5000"
                                value={form.salary.clone()}
                                oninput={on_field(&form, |f, v| f.salary = v)}
                                disabled={submitting} />
                        </div>
                        <button class="btn btn-success" type="submit" disabled={submitting}>
                            { if submitting { "Adding..." } else { "Add Worker" } }
                        </button>
                    </form>
                </div>
            }

            <div class="card">
                if view.workers.is_empty() {
                    <p class="empty">{"No workers yet. Add one to get started."}</p>
                } else {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Name"}</th>
                                <th>{"Department"}</th>
                                <th>{"Salary"}</th>
                                <th>{"Wallet"}</th>
                                <th>{"Status"}</th>
                                <th>{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for view.workers.iter().map(|worker| {
                                let onclick = {
                                    let worker = worker.clone();
                                    on_toggle_status.reform(move |_: MouseEvent| worker.clone())
                                };
                                let (button_class, button_label) = if worker.active {
                                    ("btn btn-small btn-danger", "Deactivate")
                                } else {
                                    ("btn btn-small btn-success", "Activate")
                                };
                                html! {
                                    <tr key={worker.id}>
                                        <td>{ &worker.name }</td>
                                        <td>{ view.department_name(worker) }</td>
                                        <td>{ worker.salary_display() }</td>
                                        <td class="mono" title={worker.wallet.clone()}>
                                            { shorten_wallet(&worker.wallet) }
                                        </td>
                                        <td><StatusBadge active={worker.active} /></td>
                                        <td>
                                            <button class={button_class} {onclick} disabled={!can_toggle}>
                                                { button_label }
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }
            </div>
        </div>
    }
}
