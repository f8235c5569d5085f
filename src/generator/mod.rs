//! # Generator Module
//!
//! Artifact generators for a layered C# web application. Given a domain model
//! name, the generators produce one artifact set:
//!
//! - **Controller** - API controller extending the configured generic base
//! - **Repository** - interface + implementation pair
//! - **Service** - interface + implementation pair
//! - **DTOs** - read ("Get") and write shapes derived from the model class
//! - **Mapper** - object-mapper profile between model and DTOs
//!
//! ## Architecture
//!
//! ```text
//! Model name → Class Extractor → Template Rendering → Generated Files
//!                                Region Patcher     → Injection Lists
//! ```
//!
//! Each generator composes three pieces: the class extractor
//! ([`crate::extractor`]) to copy the model body into DTO shapes, Askama
//! templates ([`templates`]) for the fixed artifact bodies, and the region
//! patcher ([`crate::patcher`]) to append a dependency-registration line to
//! the matching injection list.
//!
//! ## Idempotency
//!
//! Generation never overwrites: an artifact file that already exists is
//! reported as skipped, and a generator whose every file pre-exists leaves
//! its injection list untouched. Re-running generation for an existing model
//! is a logged no-op.

mod artifacts;
mod templates;


pub use artifacts::*;
pub use templates::*;
