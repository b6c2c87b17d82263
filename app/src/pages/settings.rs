//! User's settings.
use yew::prelude::*;

#[function_component(Settings)]
pub fn settings() -> Html {
    html! {
    <>
        <h1>{ "Settings" }</h1>
        <p>{ "No settings yet." }</p>
    </>
    }
}
