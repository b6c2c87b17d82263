//! Main navigation.
use crate::routes::Route;
use navpill_ui::components::navigation::{NavigationPill, PillItem};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(MainNavigation)]
pub fn main_navigation() -> Html {
    let navigator = use_navigator().expect("navigator not found");
    let route = use_route::<Route>();

    let onselect = Callback::from(move |key: String| {
        let Some(route) = route_for_key(&key) else {
            tracing::error!(?key, "unknown navigation key");
            return;
        };

        navigator.push(&route);
    });

    html! {
        <NavigationPill<String>
            id={"main-navigation"}
            items={nav_items()}
            selected={route.as_ref().and_then(active_key)}
            {onselect} />
    }
}

// ***************
// *** helpers ***
// ***************

/// Items displayed in the main navigation.
fn nav_items() -> Vec<PillItem<String>> {
    vec![
        PillItem::new("home".to_string(), "Home", "/"),
        PillItem::new("dashboard".to_string(), "Dashboard", "/dashboard"),
        PillItem::new("settings".to_string(), "Settings", "/settings"),
    ]
}

/// Key of the navigation item covering the route, if any.
fn active_key(route: &Route) -> Option<String> {
    match route {
        Route::Home => Some("home".to_string()),
        Route::Dashboard => Some("dashboard".to_string()),
        Route::Settings => Some("settings".to_string()),
        Route::NotFound => None,
    }
}

/// Route activated by a navigation item key.
fn route_for_key(key: &str) -> Option<Route> {
    match key {
        "home" => Some(Route::Home),
        "dashboard" => Some(Route::Dashboard),
        "settings" => Some(Route::Settings),
        _ => None,
    }
}
