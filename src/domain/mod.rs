//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — photo set, tile, step/run report structs.
//! - `constants.rs` — fixed photo count, naming scheme and file names.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Report structs are the `--json` output schema. Keep changes explicit.

pub mod constants;
pub mod models;
