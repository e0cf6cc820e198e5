//! Document Workflow With Overrides
//!
//! Loads a review workflow from JSON, rejects an invalid event, forces a
//! state change an editor is allowed to make, and prints the journal.
//!
//! Run with: cargo run --example document_editor

use retrace::{Configuration, StateMachine};

const WORKFLOW: &str = r#"{
    "initial": "draft",
    "states": {
        "draft": { "transitions": { "submit": "review" } },
        "review": { "transitions": { "approve": "published", "reject": "draft" } },
        "published": { "transitions": { "archive": "archived" } },
        "archived": {}
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Document Workflow ===\n");

    let config = Configuration::from_json_str(WORKFLOW)?;
    let mut machine = StateMachine::new(config);

    machine.trigger("submit")?;
    println!("Submitted: {}", machine.state());
    println!("Available events: {:?}", machine.events());

    if let Err(err) = machine.trigger("archive") {
        println!("Rejected: {err}");
    }

    machine.trigger("approve")?;
    println!("Approved: {}", machine.state());

    machine.change_state("draft")?;
    println!("Editor override: {}", machine.state());

    println!("\nStates reacting to 'reject': {:?}", machine.states(Some("reject")));

    println!("\nJournal:");
    for transition in machine.transitions() {
        println!(
            "  {} -> {} ({:?}) at {}",
            transition.from, transition.to, transition.cause, transition.timestamp
        );
    }

    machine.clear_history();
    println!("\nHistory cleared; can undo: {}", machine.can_undo());

    println!("\n=== Example Complete ===");
    Ok(())
}
