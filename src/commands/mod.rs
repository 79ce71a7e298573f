//! Command handler layer.
//!
//! Runs the requested steps, turns their results into reports and prints
//! them. Business logic lives in `services/*`.

pub mod run;

pub use run::handle_command;
