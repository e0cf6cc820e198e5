//! Macros for declaring configurations inline.

/// Build a [`Configuration`](crate::core::Configuration) from a declarative
/// table of states and transitions.
///
/// Identifiers are used verbatim as state and event names.
///
/// # Example
///
/// ```
/// use retrace::fsm_config;
///
/// let config = fsm_config! {
///     initial: draft,
///     states: {
///         draft: { submit => review },
///         review: { approve => published, reject => draft },
///         published: {},
///     }
/// };
///
/// assert_eq!(config.initial, "draft");
/// assert_eq!(config.target("review", "reject"), Some("draft"));
/// assert!(config.validate().is_success());
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident: { $($event:ident => $target:ident),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        let mut states = ::std::collections::BTreeMap::new();
        $(
            states.insert(
                stringify!($state).to_string(),
                $crate::core::StateDefinition::new()
                    $(.on(stringify!($event), stringify!($target)))*,
            );
        )*
        $crate::core::Configuration::new(stringify!($initial), states)
    }};
}
