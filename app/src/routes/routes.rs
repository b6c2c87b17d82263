use crate::pages::{Dashboard, Home, NotFound, Settings};
use yew::prelude::*;
use yew_router::prelude::*;

// Routes
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    /// Landing page.
    #[at("/")]
    Home,

    /// Metrics dashboard.
    #[at("/dashboard")]
    Dashboard,

    /// User's settings.
    #[at("/settings")]
    Settings,

    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::Settings => html! { <Settings /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
