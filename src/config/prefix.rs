/// Class-name prefix used when no `Prefix` context is provided.
///
/// Set `UI_PREFIX` at build time to match the prefix the stylesheets were
/// compiled with.
pub fn default_prefix() -> &'static str {
    match option_env!("UI_PREFIX") {
        Some(prefix) if !prefix.is_empty() => prefix,
        _ => "cds",
    }
}

/// Builds a namespaced BEM class name such as `cds--side-nav__footer`.
pub fn prefixed(prefix: &str, block: &str) -> String {
    format!("{prefix}--{block}")
}
