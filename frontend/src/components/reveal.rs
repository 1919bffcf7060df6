use web_sys::{window, Element};
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Fraction of the viewport height an element's top must pass before it
/// counts as seen.
const REVEAL_THRESHOLD: f64 = 0.9;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_ms: u32,
}

fn in_viewport(node: &NodeRef) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };
    let viewport_height = window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    rect.top() < viewport_height * REVEAL_THRESHOLD && rect.bottom() > 0.0
}

/// Fades its children in the first time they scroll into view. Once shown
/// they stay shown. The transition itself lives in the page stylesheet
/// under `.reveal`.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    let check = {
        let node = node.clone();
        let visible = visible.clone();
        move || {
            if !*visible && in_viewport(&node) {
                visible.set(true);
            }
        }
    };

    {
        let check = check.clone();
        use_effect_with_deps(
            move |_| {
                check();
                || ()
            },
            (),
        );
    }

    use_event_with_window("scroll", move |_: Event| check());

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*visible).then_some("visible"), props.class.clone())}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
