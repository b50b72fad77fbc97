use stylist::yew::styled_component;
use web_sys::console;
use yew::classes;
use yew::function_component;
use yew::html;
use yew::use_effect_with_deps;
use yew::use_state;
use yew::ContextProvider;
use yew::Html;

use side_nav_footer::components::SideNavFooter;
use side_nav_footer::data::FooterOptions;
use side_nav_footer::hooks::use_prefix;
use side_nav_footer::hooks::use_side_nav_toggle;
use side_nav_footer::hooks::Prefix;

const SHELL_OPTIONS: &str = r#"{ "expanded": true, "className": "demo-footer" }"#;

fn shell_options() -> FooterOptions {
    FooterOptions::from_json(SHELL_OPTIONS).unwrap_or_else(|err| {
        console::error_1(&format!("Ignoring side navigation options: {err}").into());
        FooterOptions::new(true)
    })
}

#[styled_component]
fn SideNav() -> Html {
    let prefix = use_prefix();
    let options = (*use_state(shell_options)).clone();
    let toggle = use_side_nav_toggle(options.expanded);
    let expanded = toggle.expanded();

    use_effect_with_deps(
        |expanded| {
            let state = if *expanded { "expanded" } else { "collapsed" };
            console::log_1(&format!("Side navigation {state}").into());
            || ()
        },
        expanded,
    );

    let props = FooterOptions {
        expanded,
        ..options
    }
    .into_props(toggle.on_toggle());

    let width = if expanded { "16rem" } else { "3rem" };
    let class_expanded = Some(prefix.class("side-nav--expanded")).filter(|_| expanded);

    html! {
        <nav class={classes!(prefix.class("side-nav"), class_expanded, css! {
            display: flex;
            flex-direction: column;
            height: 100vh;
            width: ${width};
            background: ${"#f4f4f4"};
            transition: ${"width 110ms"};
        })}>
            <div class={prefix.class("side-nav__items")} />
            <SideNavFooter ..props />
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <ContextProvider<Prefix> context={Prefix::default()}>
            <SideNav />
        </ContextProvider<Prefix>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
