//! Main application.
use crate::navigation::MainNavigation;
use crate::routes::{routes::switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

// *********************
// *** App Component ***
// *********************

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div id={"content"}>
                <header id={"main-header"}>
                    <MainNavigation />
                </header>

                <main>
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}
