//! The stateful runtime.
//!
//! A [`StateMachine`] owns its configuration, current state, undo/redo
//! history and transition journal. Every operation is synchronous and runs to
//! completion; callers sharing a machine across threads must serialize access
//! themselves.

mod error;
mod state_machine;

pub use error::MachineError;
pub use state_machine::StateMachine;
