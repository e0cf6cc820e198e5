//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic machine driven by a single event,
//! and walking its history backwards and forwards.
//!
//! Run with: cargo run --example traffic_light

use retrace::builder::cycle;
use retrace::StateMachine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Traffic Light State Machine ===\n");

    let mut machine = StateMachine::new(cycle("timer", &["green", "yellow", "red"])?);
    println!("Initial state: {}\n", machine.state());

    println!("Transition sequence:");
    for _ in 0..4 {
        let from = machine.state().to_string();
        machine.trigger("timer")?;
        println!("  {} -> {}", from, machine.state());
    }

    println!("\nStepping back:");
    while machine.undo() {
        println!("  undo -> {}", machine.state());
    }

    println!("\nStepping forward again:");
    while machine.redo() {
        println!("  redo -> {}", machine.state());
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
