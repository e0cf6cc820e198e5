//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and the [`fsm_config!`](crate::fsm_config)
//! macro for declaring configurations in code instead of JSON.

pub mod configuration;
pub mod error;
pub mod macros;

pub use configuration::ConfigurationBuilder;
pub use error::BuildError;

use crate::core::Configuration;

/// Create a cyclic configuration where a single event walks `states` in
/// order and wraps back to the first one.
///
/// Returns [`BuildError::NoStates`] for an empty list.
///
/// # Example
///
/// ```
/// use retrace::builder::cycle;
///
/// let config = cycle("timer", &["green", "yellow", "red"]).unwrap();
/// assert_eq!(config.initial, "green");
/// assert_eq!(config.target("red", "timer"), Some("green"));
/// ```
pub fn cycle(event: &str, states: &[&str]) -> Result<Configuration, BuildError> {
    let first = states.first().ok_or(BuildError::NoStates)?;
    states
        .iter()
        .zip(states.iter().cycle().skip(1))
        .fold(ConfigurationBuilder::new().initial(*first), |builder, (from, to)| {
            builder.transition(*from, event, *to)
        })
        .build()
}
