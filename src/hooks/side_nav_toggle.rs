use std::rc::Rc;
use yew::hook;
use yew::use_reducer_eq;
use yew::Callback;
use yew::MouseEvent;
use yew::Reducible;
use yew::UseReducerHandle;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SideNavState {
    pub expanded: bool,
}

pub enum SideNavAction {
    Toggle,
}

impl Reducible for SideNavState {
    type Action = SideNavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            Self::Action::Toggle => Rc::new(Self {
                expanded: !self.expanded,
            }),
        }
    }
}

/// Expansion state of a side navigation, owned by the component that renders
/// it and handed down to the footer as `expanded` / `on_toggle`.
#[derive(Clone)]
pub struct UseSideNavToggleHandle {
    state: UseReducerHandle<SideNavState>,
}

impl UseSideNavToggleHandle {
    pub fn expanded(&self) -> bool {
        self.state.expanded
    }

    /// Each event flips whatever the state is when it is reduced, so clicks
    /// landing before a re-render are not lost.
    pub fn on_toggle(&self) -> Callback<MouseEvent> {
        let dispatcher = self.state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(SideNavAction::Toggle))
    }
}

#[hook]
pub fn use_side_nav_toggle(initially_expanded: bool) -> UseSideNavToggleHandle {
    let state = use_reducer_eq(move || SideNavState {
        expanded: initially_expanded,
    });
    UseSideNavToggleHandle { state }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::function_component;
    use yew::html;
    use yew::Html;
    use yew::Properties;
    use yew::ServerRenderer;

    use crate::components::SideNavFooter;

    fn reduce(expanded: bool, actions: Vec<SideNavAction>) -> bool {
        actions
            .into_iter()
            .fold(Rc::new(SideNavState { expanded }), |state, action| {
                state.reduce(action)
            })
            .expanded
    }

    #[test]
    fn toggle_flips_current_state() {
        let state = Rc::new(SideNavState { expanded: true });
        let state = state.reduce(SideNavAction::Toggle);
        assert!(!state.expanded);
        let state = state.reduce(SideNavAction::Toggle);
        assert!(state.expanded);
    }

    #[test]
    fn two_toggles_before_render_return_to_start() {
        assert!(reduce(true, vec![SideNavAction::Toggle, SideNavAction::Toggle]));
        assert!(!reduce(false, vec![SideNavAction::Toggle, SideNavAction::Toggle]));
        assert!(reduce(false, vec![SideNavAction::Toggle]));
    }

    #[derive(PartialEq, Properties)]
    struct Props {
        initially_expanded: bool,
    }

    #[function_component]
    fn Shell(props: &Props) -> Html {
        let toggle = use_side_nav_toggle(props.initially_expanded);
        html! {
            <SideNavFooter expanded={toggle.expanded()} on_toggle={toggle.on_toggle()} />
        }
    }

    async fn render(initially_expanded: bool) -> String {
        ServerRenderer::<Shell>::with_props(move || Props { initially_expanded })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn footer_reflects_initial_state() {
        assert!(render(true).await.contains(r#"data-icon="close""#));
        assert!(render(false).await.contains(r#"data-icon="chevron-right""#));
    }
}
