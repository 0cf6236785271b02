//! Service layer containing the scan/render pipeline.
//!
//! ## Service map
//! - `scan.rs` — directory listing, suffix/exclusion filtering, model names.
//! - `template.rs` — aspnet-codegenerator command rendering.
//! - `emitter.rs` — the full list → filter → render → print pass.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - The directory listing is the only side effect besides writing output.

pub mod emitter;
pub mod output;
pub mod scan;
pub mod template;
