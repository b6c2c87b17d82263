//! Pill shaped navigation with a sliding selection indicator.
use crate::animation::SpringConfig;
use crate::error::{Error, Result};
use crate::hooks::use_animated_rect;
use crate::types::IndicatorRect;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew::virtual_dom::Key;

/// Convenience trait grouping required traits for an item key.
pub trait PillKey: PartialEq + Clone + Into<Key> {}
impl<T> PillKey for T where T: PartialEq + Clone + Into<Key> {}

/// One selectable entry in the navigation pill.
#[derive(Debug, Clone, PartialEq)]
pub struct PillItem<K>
where
    K: PillKey,
{
    /// Identifies the item for selection.
    pub key: K,

    /// Display text.
    pub label: String,

    /// Link target when the item is activated.
    pub href: String,
}

impl<K> PillItem<K>
where
    K: PillKey,
{
    pub fn new(key: K, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Properties for [`NavigationPill`].
#[derive(Properties, PartialEq)]
pub struct NavigationPillProps<K>
where
    K: PillKey,
{
    #[prop_or_default]
    pub id: Option<AttrValue>,

    #[prop_or_default]
    pub class: Classes,

    /// Items displayed left to right.
    /// Order determines placement and measurement lookup.
    pub items: Vec<PillItem<K>>,

    /// Key of the selected item.
    #[prop_or_default]
    pub selected: Option<K>,

    /// Callback to run when an item is activated.
    /// If provided the link's default navigation is suppressed.
    #[prop_or_default]
    pub onselect: Option<Callback<K>>,

    /// Spring parameters for the indicator transition.
    #[prop_or_default]
    pub motion: SpringConfig,
}

/// Navigation pill.
/// A sliding highlight tracks the selected item.
#[function_component(NavigationPill)]
pub fn navigation_pill<K>(props: &NavigationPillProps<K>) -> Html
where
    K: PillKey + 'static,
{
    let container = use_node_ref();
    let target = use_state(|| None::<IndicatorRect>);

    {
        // reposition the indicator once the items are laid out
        let container = container.clone();
        let target = target.clone();

        use_effect_with(
            (props.items.clone(), props.selected.clone()),
            move |(items, selected)| {
                let bounds = match measure_items(&container) {
                    Ok(bounds) => bounds,
                    Err(err) => {
                        tracing::debug!(?err, "could not measure navigation items");
                        return;
                    }
                };

                if let Some(rect) = indicator_target(items, selected.as_ref(), &bounds) {
                    target.set(Some(rect));
                }
            },
        );
    }

    let indicator = use_animated_rect(*target, props.motion);

    let onclick_item = {
        let onselect = props.onselect.clone();

        move |key: K| -> Option<Callback<MouseEvent>> {
            onselect.clone().map(|onselect| {
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    onselect.emit(key.clone());
                })
            })
        }
    };

    html! {
        <div id={props.id.clone()}
            class={classes!("navigation-pill", props.class.clone())}>

            // sliding highlight behind the active item
            <div class={classes!("pill-indicator")}
                style={format!("left: {}px; width: {}px;", indicator.left, indicator.width)}>
            </div>

            <div ref={container} class={classes!("pill-items")}>
                { props.items
                    .iter()
                    .map(|item| {
                        let mut class = classes!("pill-item", "clickable");
                        if Some(&item.key) == props.selected.as_ref() {
                            class.push("active");
                        }

                        html! {
                            <a key={item.key.clone()} {class}
                                href={item.href.clone()}
                                onclick={onclick_item(item.key.clone())}>{
                                &item.label
                            }</a>
                        }
                    })
                    .collect::<Html>()
                }
            </div>
        </div>
    }
}

// ***************
// *** helpers ***
// ***************

/// Measures the horizontal bounds of the container's children,
/// aligned by index with the rendered items.
///
/// Children that are not laid out as HTML elements end the scan.
fn measure_items(container: &NodeRef) -> Result<Vec<IndicatorRect>> {
    let Some(container) = container.cast::<web_sys::Element>() else {
        return Err(Error::ContainerNotMounted);
    };

    let children = container.children();
    let mut bounds = Vec::with_capacity(children.length() as usize);
    for index in 0..children.length() {
        let Some(child) = children.item(index) else {
            break;
        };

        let Ok(child) = child.dyn_into::<web_sys::HtmlElement>() else {
            break;
        };

        bounds.push(IndicatorRect {
            left: child.offset_left() as f64,
            width: child.offset_width() as f64,
        });
    }

    Ok(bounds)
}

/// Calculates the rectangle the indicator should occupy.
///
/// # Arguments
/// 1. Items, in display order.
/// 2. Key of the selected item.
/// 3. Measured bounds of the rendered items, aligned by index.
///
/// # Returns
/// + Bounds of the item matching the selected key, if it was measured.
/// + Bounds of the first item if no item matches the key,
/// or the matching item was not measured.
/// + `None` if nothing was rendered or measured;
/// the indicator keeps its last position.
///
/// Keys are expected to be unique.
/// If duplicated, the first matching item governs.
fn indicator_target<K>(
    items: &[PillItem<K>],
    selected: Option<&K>,
    bounds: &[IndicatorRect],
) -> Option<IndicatorRect>
where
    K: PillKey,
{
    if items.is_empty() {
        // nothing rendered, keep the previous position
        return None;
    }

    let selected_index =
        selected.and_then(|selected| items.iter().position(|item| &item.key == selected));

    if let Some(rect) = selected_index.and_then(|index| bounds.get(index)) {
        return Some(*rect);
    }

    // default to the first item if nothing is selected
    bounds.first().copied()
}

#[cfg(test)]
#[path = "./navigation_pill_test.rs"]
mod navigation_pill_test;
