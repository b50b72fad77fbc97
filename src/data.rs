use serde::Deserialize;
use yew::AttrValue;
use yew::Callback;
use yew::Classes;
use yew::MouseEvent;

use crate::components::side_nav_footer::Props;
use crate::components::side_nav_footer::DEFAULT_ASSISTIVE_TEXT;
use crate::error::ContractViolation;

/// Serializable part of the footer's properties, for shells that read their
/// layout from JSON. The toggle callback is supplied separately.
#[derive(Clone, Debug, PartialEq)]
pub struct FooterOptions {
    pub assistive_text: String,
    pub class_name: Option<String>,
    pub expanded: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawFooterOptions {
    assistive_text: Option<String>,
    class_name: Option<String>,
    expanded: Option<bool>,
}

impl TryFrom<RawFooterOptions> for FooterOptions {
    type Error = ContractViolation;
    fn try_from(raw: RawFooterOptions) -> Result<Self, Self::Error> {
        Ok(Self {
            assistive_text: raw
                .assistive_text
                .unwrap_or_else(|| DEFAULT_ASSISTIVE_TEXT.to_string()),
            class_name: raw.class_name.filter(|name| !name.is_empty()),
            expanded: raw
                .expanded
                .ok_or(ContractViolation::MissingProperty("expanded"))?,
        })
    }
}

impl FooterOptions {
    pub fn new(expanded: bool) -> Self {
        Self {
            assistive_text: DEFAULT_ASSISTIVE_TEXT.to_string(),
            class_name: None,
            expanded,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ContractViolation> {
        let raw: RawFooterOptions = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    pub fn into_props(self, on_toggle: Callback<MouseEvent>) -> Props {
        Props {
            assistive_text: AttrValue::from(self.assistive_text),
            class: self.class_name.map(Classes::from).unwrap_or_default(),
            expanded: self.expanded,
            on_toggle,
        }
    }
}
