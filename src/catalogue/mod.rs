//! In-memory translation catalogue.
//!
//! ## Module Structure
//!
//! - `entry`: one translatable message and its metadata
//! - `group`: ordered entries of one UI context
//! - `store`: the catalogue for one locale, with lookup and editing
//! - `validate`: consistency warnings for maintenance tooling

mod entry;
mod group;
mod store;
mod validate;

pub use entry::{Entry, Location, MessageKey, Status};
pub use group::ContextGroup;
pub use store::{Catalogue, CatalogueStats, DEFAULT_FORMAT_VERSION};
pub use validate::{DuplicateReason, ValidationWarning, WarningKind};
