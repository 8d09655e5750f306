//! Departments page: list plus a toggleable creation form.

use core_types::{Department, format_usd};
use web_types::{DepartmentForm, fallback};
use yew::prelude::*;

use crate::components::{Loading, NoticeBanner, StatusBadge};
use crate::page_state::{PageAction, PageState};
use crate::pages::{not_ready, spawn_load, spawn_write};

#[function_component(DepartmentsPage)]
pub fn departments_page() -> Html {
    let state = use_reducer(PageState::<Vec<Department>>::default);
    let show_form = use_state(|| false);
    let name = use_state(String::new);

    let reload = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| {
            spawn_load(dispatcher.clone(), fallback::LOAD_DEPARTMENTS, |client| async move {
                client.departments().await
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

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_submit = {
        let dispatcher = state.dispatcher();
        let name = name.clone();
        let show_form = show_form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = DepartmentForm {
                name: (*name).clone(),
            };
            let body = match form.validate() {
                Ok(body) => body,
                Err(err) => {
                    dispatcher.dispatch(PageAction::Rejected(err.to_string()));
                    return;
                }
            };

            let name = name.clone();
            let show_form = show_form.clone();
            spawn_write(
                dispatcher.clone(),
                fallback::CREATE_DEPARTMENT,
                move |client| async move { client.create_department(&body).await },
                move |_created| {
                    name.set(String::new());
                    show_form.set(false);
                    None
                },
                reload.clone(),
            );
        })
    };

    let Some(departments) = state.data() else {
        return not_ready(&*state);
    };
    let submitting = state.is_submitting();

    html! {
        <div>
            <div class="page-header">
                <h1 class="page-title">{"Departments"}</h1>
                <button class="btn btn-primary" onclick={on_toggle_form}>
                    { if *show_form { "Cancel" } else { "+ Add Department" } }
                </button>
            </div>

            <NoticeBanner notice={state.notice().cloned()} />
            if state.is_refreshing() {
                <Loading message="Refreshing..." />
            }

            if *show_form {
                <div class="card">
                    <h2 class="card-title">{"Create New Department"}</h2>
                    <form onsubmit={on_submit}>
                        <div class="form-group">
                            <label class="form-label">{"Department Name"}</label>
                            <input
                                class="form-input"
                                type="text"
                                placeholder="e.g. Engineering"
                                value={(*name).clone()}
                                oninput={on_name_input}
                                disabled={submitting}
                            />
                        </div>
                        <button class="btn btn-success" type="submit" disabled={submitting}>
                            { if submitting { "Creating..." } else { "Create Department" } }
                        </button>
                    </form>
                </div>
            }

            <div class="card">
                if departments.is_empty() {
                    <p class="empty">{"No departments yet. Create one to get started."}</p>
                } else {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Name"}</th>
                                <th>{"Number of Workers"}</th>
                                <th>{"Total Monthly Payroll Cost"}</th>
                                <th>{"Status"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for departments.iter().map(|department| html! {
                                <tr key={department.id}>
                                    <td>{ &department.name }</td>
                                    <td>{ department.worker_count.to_string() }</td>
                                    <td>{ format_usd(department.total_monthly_payroll) }</td>
                                    <td><StatusBadge active={department.active} /></td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }
            </div>
        </div>
    }
}
