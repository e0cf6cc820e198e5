//! Core data types of the state machine.
//!
//! - Declarative configuration via [`Configuration`] and [`StateDefinition`]
//! - Undo/redo stacks via [`UndoHistory`]
//! - Journal records via [`StateTransition`]
//!
//! Nothing in this module knows about a "current" state; that lives in
//! [`crate::machine::StateMachine`].

mod config;
mod history;

pub use config::{
    ConfigError, ConfigViolation, Configuration, EventId, StateDefinition, StateId,
};
pub use history::{Cause, StateTransition, UndoHistory};
