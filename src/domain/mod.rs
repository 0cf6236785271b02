//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — scaffold options, command records, JSON envelope.
//! - `constants.rs` — model file suffix and the exclusion set.
//!
//! Domain types should be data-only: no filesystem side effects.
//! Changes in `ControllerCommand` alter the `--json` output schema.

pub mod constants;
pub mod models;
