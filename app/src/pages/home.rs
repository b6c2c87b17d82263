//! Landing page.
use yew::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
    <>
        <h1>{ "Home" }</h1>
        <p>{ "Switch sections above to watch the indicator slide." }</p>
    </>
    }
}
