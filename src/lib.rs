//! Retrace: a configurable finite-state machine with undo/redo
//!
//! A machine is described by a declarative [`Configuration`]: an initial state
//! and, per state, a table mapping event names to target states. The runtime
//! tracks a single current state and keeps a linear history so every change
//! can be stepped back and re-applied.
//!
//! # Core Concepts
//!
//! - **Configuration**: Immutable state/transition tables, loadable from JSON
//! - **StateMachine**: Current state plus undo/redo stacks
//! - **Journal**: Timestamped record of every applied change
//!
//! # Example
//!
//! ```rust
//! use retrace::{Configuration, MachineError, StateMachine};
//!
//! let config = Configuration::from_json_str(
//!     r#"{
//!         "initial": "green",
//!         "states": {
//!             "green": { "transitions": { "timer": "yellow" } },
//!             "yellow": { "transitions": { "timer": "red" } },
//!             "red": { "transitions": { "timer": "green" } }
//!         }
//!     }"#,
//! )
//! .unwrap();
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("timer").unwrap();
//! machine.trigger("timer").unwrap();
//! assert_eq!(machine.state(), "red");
//!
//! assert!(matches!(
//!     machine.trigger("honk"),
//!     Err(MachineError::InvalidTransition { .. })
//! ));
//!
//! machine.undo();
//! assert_eq!(machine.state(), "yellow");
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, ConfigurationBuilder};
pub use crate::core::{Configuration, StateDefinition, StateTransition, UndoHistory};
pub use crate::machine::{MachineError, StateMachine};
