//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{AnalyticsPage, DashboardPage, DepartmentsPage, TreasuryPage, WorkersPage};

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/departments")]
    Departments,
    #[at("/workers")]
    Workers,
    #[at("/treasury")]
    Treasury,
    #[at("/analytics")]
    Analytics,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Navbar entries in display order.
const NAV_ITEMS: [(Route, &str, &str); 5] = [
    (Route::Dashboard, "📊", "Dashboard"),
    (Route::Departments, "🏢", "Departments"),
    (Route::Workers, "👥", "Workers"),
    (Route::Treasury, "💰", "Treasury"),
    (Route::Analytics, "📈", "Analytics"),
];

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Departments => html! { <DepartmentsPage /> },
        Route::Workers => html! { <WorkersPage /> },
        Route::Treasury => html! { <TreasuryPage /> },
        Route::Analytics => html! { <AnalyticsPage /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="app">
                <Navbar />
                <main class="main-content">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

/// Top navigation bar; highlights the current route.
#[function_component(Navbar)]
fn navbar() -> Html {
    let current = use_route::<Route>();

    html! {
        <nav class="navbar">
            <Link<Route> to={Route::Dashboard} classes="nav-brand">
                {"BossBoard"}
            </Link<Route>>
            <ul class="nav-links">
                { for NAV_ITEMS.iter().map(|(route, icon, label)| {
                    let active = current.as_ref() == Some(route);
                    html! {
                        <li>
                            <Link<Route>
                                to={route.clone()}
                                classes={classes!("nav-link", active.then_some("active"))}
                            >
                                <span class="nav-icon">{ *icon }</span>
                                { *label }
                            </Link<Route>>
                        </li>
                    }
                })}
            </ul>
        </nav>
    }
}
