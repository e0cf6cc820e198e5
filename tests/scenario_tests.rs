//! End-to-end scenarios driving machines built from JSON and the builder.

use retrace::builder::cycle;
use retrace::core::Cause;
use retrace::{Configuration, ConfigurationBuilder, MachineError, StateMachine};

const TRAFFIC_LIGHT: &str = r#"{
    "initial": "green",
    "states": {
        "green": { "transitions": { "timer": "yellow" } },
        "yellow": { "transitions": { "timer": "red" } },
        "red": { "transitions": { "timer": "green" } }
    }
}"#;

#[test]
fn traffic_light_walk_with_undo_and_redo() {
    let config = Configuration::from_json_str(TRAFFIC_LIGHT).unwrap();
    let mut machine = StateMachine::new(config);
    assert_eq!(machine.state(), "green");

    machine.trigger("timer").unwrap();
    assert_eq!(machine.state(), "yellow");
    machine.trigger("timer").unwrap();
    assert_eq!(machine.state(), "red");

    assert!(machine.undo());
    assert_eq!(machine.state(), "yellow");
    assert!(machine.undo());
    assert_eq!(machine.state(), "green");
    assert!(!machine.undo());
    assert_eq!(machine.state(), "green");

    assert!(machine.redo());
    assert_eq!(machine.state(), "yellow");
}

#[test]
fn get_states_on_two_state_machine() {
    let config = Configuration::from_json_str(
        r#"{"initial":"A","states":{"A":{"transitions":{"go":"B"}},"B":{"transitions":{}}}}"#,
    )
    .unwrap();
    let machine = StateMachine::new(config);

    assert_eq!(machine.states(Some("go")), vec!["A"]);

    let mut all = machine.states(None);
    all.sort_unstable();
    assert_eq!(all, vec!["A", "B"]);
}

#[test]
fn builder_and_json_produce_equal_machines() {
    let from_json = Configuration::from_json_str(TRAFFIC_LIGHT).unwrap();
    let from_builder = ConfigurationBuilder::new()
        .initial("green")
        .transition("green", "timer", "yellow")
        .transition("yellow", "timer", "red")
        .transition("red", "timer", "green")
        .build()
        .unwrap();
    let from_cycle = cycle("timer", &["green", "yellow", "red"]).unwrap();

    assert_eq!(from_json, from_builder);
    assert_eq!(from_json, from_cycle);
}

#[test]
fn document_workflow_with_overrides() {
    let config = ConfigurationBuilder::new()
        .initial("draft")
        .transition("draft", "submit", "review")
        .transition("review", "approve", "published")
        .transition("review", "reject", "draft")
        .state("published")
        .build()
        .unwrap();
    let mut machine = StateMachine::new(config);

    machine.trigger("submit").unwrap();
    assert_eq!(
        machine.trigger("submit"),
        Err(MachineError::InvalidTransition {
            state: "review".to_string(),
            event: "submit".to_string(),
        })
    );

    machine.trigger("approve").unwrap();
    assert!(machine.events().is_empty());

    // An editor can still force the document back.
    machine.change_state("draft").unwrap();
    assert_eq!(machine.state(), "draft");

    machine.reset().unwrap();
    assert_eq!(machine.state(), "draft");

    let causes: Vec<Cause> = machine
        .transitions()
        .iter()
        .map(|transition| transition.cause.clone())
        .collect();
    assert_eq!(causes.last(), Some(&Cause::Reset));
    assert_eq!(causes.len(), 4);

    assert!(machine.undo());
    assert!(machine.undo());
    assert_eq!(machine.state(), "published");
}

#[test]
fn error_messages_name_the_offending_identifiers() {
    let mut machine = StateMachine::new(Configuration::from_json_str(TRAFFIC_LIGHT).unwrap());

    let err = machine.change_state("blue").unwrap_err();
    assert_eq!(
        err.to_string(),
        "State 'blue' is not declared in the configuration"
    );

    let err = machine.trigger("honk").unwrap_err();
    assert_eq!(
        err.to_string(),
        "No transition for event 'honk' from state 'green'"
    );
}
