#![cfg(target_arch = "wasm32")]
//! Tests for `components/navigation`.
use gloo_timers::future::TimeoutFuture;
use navpill_ui::components::navigation::{NavigationPill, PillItem};
use wasm_bindgen_test::*;
use yew::prelude::*;
wasm_bindgen_test_configure!(run_in_browser);

// **********************
// *** NavigationPill ***
// **********************

#[wasm_bindgen_test]
async fn navigation_pill_should_mark_the_selected_item() {
    #[function_component(App)]
    fn app() -> Html {
        html! {
            <NavigationPill<String>
                items={create_items()}
                selected={Some("reports".to_string())} />
        }
    }

    let root = create_root();
    yew::Renderer::<App>::with_root(root.clone()).render();
    TimeoutFuture::new(50).await;

    let items = root.get_elements_by_class_name("pill-item");
    assert_eq!(3, items.length(), "each item should render");

    let active = root.get_elements_by_class_name("active");
    assert_eq!(1, active.length(), "exactly one item should be active");
    assert_eq!(
        Some("Reports".to_string()),
        active.item(0).unwrap().text_content(),
        "selected item should be active"
    );
}

#[wasm_bindgen_test]
async fn navigation_pill_should_render_an_indicator() {
    #[function_component(App)]
    fn app() -> Html {
        html! {
            <NavigationPill<String> items={create_items()} />
        }
    }

    let root = create_root();
    yew::Renderer::<App>::with_root(root.clone()).render();
    TimeoutFuture::new(50).await;

    let indicator = root.get_elements_by_class_name("pill-indicator");
    assert_eq!(1, indicator.length(), "indicator should render");

    // without a selection nothing is active
    let active = root.get_elements_by_class_name("active");
    assert_eq!(0, active.length(), "no item should be active");
}

// ***************
// *** helpers ***
// ***************

fn create_items() -> Vec<PillItem<String>> {
    vec![
        PillItem::new("overview".to_string(), "Overview", "/overview"),
        PillItem::new("reports".to_string(), "Reports", "/reports"),
        PillItem::new("settings".to_string(), "Settings", "/settings"),
    ]
}

fn create_root() -> web_sys::Element {
    let document = web_sys::window()
        .expect("window not found")
        .document()
        .expect("document not found");

    let root = document
        .create_element("div")
        .expect("could not create root element");

    document
        .body()
        .expect("body not found")
        .append_child(&root)
        .expect("could not attach root element");

    root
}
