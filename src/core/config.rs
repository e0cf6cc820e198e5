//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every declared state, the
//! table of events it reacts to. It is plain data: loading it from JSON never
//! checks that the tables are consistent. Use [`Configuration::validate`] when
//! that guarantee is wanted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Identifier of a declared state.
pub type StateId = String;

/// Identifier of an event.
pub type EventId = String;

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Consistency problems reported by [`Configuration::validate`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Initial state '{state}' is not declared")]
    UnknownInitialState { state: StateId },

    #[error("Transition '{from}' --{event}--> '{to}' targets an undeclared state")]
    UnknownTarget {
        from: StateId,
        event: EventId,
        to: StateId,
    },
}

/// Transition table of a single state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event identifier to target state identifier
    #[serde(default)]
    pub transitions: BTreeMap<EventId, StateId>,
}

impl StateDefinition {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an outgoing transition, returning the updated definition.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target state for `event`, if this state reacts to it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }
}

/// Immutable description of a state machine.
///
/// # Example
///
/// ```rust
/// use retrace::core::Configuration;
///
/// let config = Configuration::from_json_str(
///     r#"{
///         "initial": "green",
///         "states": {
///             "green": { "transitions": { "timer": "yellow" } },
///             "yellow": { "transitions": { "timer": "red" } },
///             "red": { "transitions": { "timer": "green" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial, "green");
/// assert_eq!(config.target("yellow", "timer"), Some("red"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// State the machine starts in
    pub initial: StateId,
    /// Declared states and their transition tables
    pub states: BTreeMap<StateId, StateDefinition>,
}

impl Configuration {
    pub fn new(initial: impl Into<StateId>, states: BTreeMap<StateId, StateDefinition>) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a configuration from any JSON byte source.
    ///
    /// Read failures surface as [`ConfigError::Parse`], as reported by
    /// `serde_json`.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serialize the configuration back to JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn state(&self, id: &str) -> Option<&StateDefinition> {
        self.states.get(id)
    }

    pub fn contains_state(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    /// Target of the transition `state --event-->`, if declared.
    pub fn target(&self, state: &str, event: &str) -> Option<&str> {
        self.state(state).and_then(|definition| definition.target(event))
    }

    /// Check the configuration for consistency, accumulating ALL violations.
    ///
    /// Construction of a machine never calls this; it is an opt-in check for
    /// callers that load configurations from untrusted sources.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::core::{Configuration, StateDefinition};
    /// use std::collections::BTreeMap;
    /// use stillwater::validation::Validation;
    ///
    /// let mut states = BTreeMap::new();
    /// states.insert("a".to_string(), StateDefinition::new().on("go", "nowhere"));
    /// let config = Configuration::new("missing", states);
    ///
    /// match config.validate() {
    ///     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
    ///     Validation::Success(_) => panic!("expected violations"),
    /// }
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.contains_state(&self.initial) {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::UnknownInitialState {
                state: self.initial.clone(),
            })
        });

        for (from, definition) in &self.states {
            for (event, to) in &definition.transitions {
                if !self.contains_state(to) {
                    checks.push(Validation::fail(ConfigViolation::UnknownTarget {
                        from: from.clone(),
                        event: event.clone(),
                        to: to.clone(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traffic_light() -> Configuration {
        let mut states = BTreeMap::new();
        states.insert("green".to_string(), StateDefinition::new().on("timer", "yellow"));
        states.insert("yellow".to_string(), StateDefinition::new().on("timer", "red"));
        states.insert("red".to_string(), StateDefinition::new().on("timer", "green"));
        Configuration::new("green", states)
    }

    #[test]
    fn parses_json_configuration() {
        let config = Configuration::from_json_str(
            r#"{"initial":"A","states":{"A":{"transitions":{"go":"B"}},"B":{"transitions":{}}}}"#,
        )
        .unwrap();

        assert_eq!(config.initial, "A");
        assert_eq!(config.states.len(), 2);
        assert_eq!(config.target("A", "go"), Some("B"));
        assert_eq!(config.target("B", "go"), None);
    }

    #[test]
    fn missing_transitions_key_is_empty_table() {
        let config =
            Configuration::from_json_str(r#"{"initial":"idle","states":{"idle":{}}}"#).unwrap();

        assert!(config.state("idle").unwrap().transitions.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = Configuration::from_json_str(r#"{"initial": 3}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn reads_from_byte_source() {
        let json = br#"{"initial":"on","states":{"on":{"transitions":{"flip":"off"}},"off":{}}}"#;
        let config = Configuration::from_json_reader(&json[..]).unwrap();
        assert_eq!(config.target("on", "flip"), Some("off"));
    }

    #[test]
    fn json_round_trip_preserves_configuration() {
        let config = traffic_light();
        let json = config.to_json_string().unwrap();
        assert_eq!(Configuration::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn lookup_of_undeclared_state_is_none() {
        let config = traffic_light();
        assert!(config.state("blue").is_none());
        assert!(!config.contains_state("blue"));
        assert_eq!(config.target("blue", "timer"), None);
    }

    #[test]
    fn consistent_configuration_validates() {
        assert!(traffic_light().validate().is_success());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let mut states = BTreeMap::new();
        states.insert(
            "a".to_string(),
            StateDefinition::new().on("x", "ghost").on("y", "b"),
        );
        states.insert("b".to_string(), StateDefinition::new().on("z", "phantom"));
        let config = Configuration::new("missing", states);

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::UnknownInitialState { .. })));
                assert_eq!(
                    errors
                        .iter()
                        .filter(|e| matches!(e, ConfigViolation::UnknownTarget { .. }))
                        .count(),
                    2
                );
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }
}
