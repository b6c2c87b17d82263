//! 404 Not Found page.
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
    <>
        <h1>{ "Not found" }</h1>
        <p>{ "There's nothing at this address." }</p>
        <div>
            <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
        </div>
    </>
    }
}
