use yew::hook;
use yew::use_context;
use yew::AttrValue;

use crate::config::prefix::default_prefix;
use crate::config::prefix::prefixed;

/// Namespace prepended to every generated class name.
///
/// Provide one with `ContextProvider<Prefix>` to scope a subtree; components
/// outside any provider fall back to [`default_prefix`].
#[derive(Clone, Debug, PartialEq)]
pub struct Prefix(pub AttrValue);

impl Prefix {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn class(&self, block: &str) -> String {
        prefixed(&self.0, block)
    }
}

impl Default for Prefix {
    fn default() -> Self {
        Self(AttrValue::from(default_prefix()))
    }
}

impl From<&'static str> for Prefix {
    fn from(prefix: &'static str) -> Self {
        Self(AttrValue::from(prefix))
    }
}

#[hook]
pub fn use_prefix() -> Prefix {
    use_context::<Prefix>().unwrap_or_default()
}
