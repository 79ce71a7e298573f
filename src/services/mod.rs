//! Service layer containing the page generator, the index patcher and
//! side-effect helpers.
//!
//! ## Service map
//! - `gallery.rs` — placeholder page rendering + write.
//! - `patcher.rs` — SVG data URIs and in-place index rewrite.
//! - `storage.rs` — site filesystem access, step errors, audit log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Rendering is pure; file access goes through `SiteFs`.
//! - Keep command handlers thin; delegate to services.

pub mod gallery;
pub mod output;
pub mod patcher;
pub mod storage;
