use yew::classes;
use yew::function_component;
use yew::html;
use yew::AttrValue;
use yew::Callback;
use yew::Classes;
use yew::Html;
use yew::MouseEvent;
use yew::Properties;

use crate::components::icons::Icon;
use crate::components::icons::IconKind;
use crate::hooks::use_prefix;

pub const DEFAULT_ASSISTIVE_TEXT: &str = "Toggle opening or closing the side navigation";

pub const FOOTER_ICON_SIZE: u32 = 20;

#[derive(PartialEq, Properties)]
pub struct Props {
    /// Read to screen readers and shown as the toggle button's tooltip.
    #[prop_or(AttrValue::from(DEFAULT_ASSISTIVE_TEXT))]
    pub assistive_text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Whether the side navigation is currently expanded.
    pub expanded: bool,
    /// Called with the click event each time the toggle button is pressed.
    pub on_toggle: Callback<MouseEvent>,
}

/// Wraps `on_toggle` in a handler that passes each event through untouched.
pub fn forward_event<E: 'static>(on_toggle: &Callback<E>) -> Callback<E> {
    let on_toggle = on_toggle.clone();
    Callback::from(move |evt: E| on_toggle.emit(evt))
}

/// Button at the bottom of the UI shell's side navigation that asks the
/// owner of the navigation to expand or collapse it.
///
/// The component keeps no state of its own: `expanded` only picks the icon,
/// and the click is reported through `on_toggle`.
#[function_component]
pub fn SideNavFooter(props: &Props) -> Html {
    let prefix = use_prefix();
    let onclick = forward_event(&props.on_toggle);
    let kind = IconKind::for_expanded(props.expanded);

    html! {
        <footer class={classes!(prefix.class("side-nav__footer"), props.class.clone())}>
            <button
                class={prefix.class("side-nav__toggle")}
                type="button"
                {onclick}
                title={props.assistive_text.clone()}
            >
                <div class={prefix.class("side-nav__icon")}>
                    <Icon {kind} size={FOOTER_ICON_SIZE} />
                </div>
                <span class={prefix.class("assistive-text")}>
                    { props.assistive_text.clone() }
                </span>
            </button>
        </footer>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    use crate::hooks::Prefix;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn clicking_the_button_emits_on_toggle_once_with_the_click() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let received: Rc<RefCell<Vec<MouseEvent>>> = Rc::default();
        let on_toggle = {
            let received = Rc::clone(&received);
            Callback::from(move |evt: MouseEvent| received.borrow_mut().push(evt))
        };

        let app = yew::Renderer::<SideNavFooter>::with_root_and_props(
            root.clone(),
            Props {
                assistive_text: AttrValue::from(DEFAULT_ASSISTIVE_TEXT),
                class: Classes::new(),
                expanded: false,
                on_toggle,
            },
        )
        .render();
        yew::platform::time::sleep(Duration::ZERO).await;

        let button: HtmlElement = root
            .query_selector(&format!(".{}", Prefix::default().class("side-nav__toggle")))
            .unwrap()
            .expect("toggle button is rendered")
            .dyn_into()
            .unwrap();
        assert!(received.borrow().is_empty());

        button.click();

        {
            let received = received.borrow();
            assert_eq!(received.len(), 1);
            assert_eq!(received[0].type_(), "click");
            let target: HtmlElement = received[0].target().unwrap().dyn_into().unwrap();
            assert!(target.is_same_node(Some(button.as_ref())));
        }

        app.destroy();
        root.remove();
    }
}
