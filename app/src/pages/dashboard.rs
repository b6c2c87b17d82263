//! Metrics dashboard.
use yew::prelude::*;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    html! {
    <>
        <h1>{ "Dashboard" }</h1>
        <p>{ "Nothing to report." }</p>
    </>
    }
}
