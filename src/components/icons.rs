use yew::function_component;
use yew::html;
use yew::Html;
use yew::Properties;

const CLOSE_PATH: &str = "M17.4141 16L24 9.4141 22.5859 8 16 14.5859 9.4143 8 8 9.4141 \
                          14.5859 16 8 22.5859 9.4143 24 16 17.4141 22.5859 24 24 22.5859 \
                          17.4141 16z";

const CHEVRON_RIGHT_PATH: &str = "M22 16L12 26 10.6 24.6 19.2 16 10.6 7.4 12 6z";

/// The two glyphs a side navigation toggle can show.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IconKind {
    Close,
    ChevronRight,
}

impl IconKind {
    /// An expanded navigation offers to close; a collapsed one offers to open.
    pub fn for_expanded(expanded: bool) -> Self {
        if expanded {
            Self::Close
        } else {
            Self::ChevronRight
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::ChevronRight => "chevron-right",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Close => CLOSE_PATH,
            Self::ChevronRight => CHEVRON_RIGHT_PATH,
        }
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub size: u32,
}

#[derive(PartialEq, Properties)]
pub struct IconProps {
    pub kind: IconKind,
    pub size: u32,
}

fn svg(kind: IconKind, size: u32) -> Html {
    let size = size.to_string();
    html! {
        <svg
            data-icon={kind.name()}
            width={size.clone()}
            height={size}
            viewBox="0 0 32 32"
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d={kind.path()} />
        </svg>
    }
}

#[function_component]
pub fn Close(props: &Props) -> Html {
    svg(IconKind::Close, props.size)
}

#[function_component]
pub fn ChevronRight(props: &Props) -> Html {
    svg(IconKind::ChevronRight, props.size)
}

#[function_component]
pub fn Icon(props: &IconProps) -> Html {
    let size = props.size;
    match props.kind {
        IconKind::Close => html! { <Close {size} /> },
        IconKind::ChevronRight => html! { <ChevronRight {size} /> },
    }
}
