//! Rule implementations for tscat.
//!
//! Each rule has a `check_*_issues(ctx)` entry point that gathers its inputs
//! from the [`CheckContext`](crate::context::CheckContext) and a pure
//! function doing the actual check on one file or entry.
//!
//! ## Module Structure
//!
//! - `consistency`: empty translations, duplicate keys and ambiguous comments
//!   (from [`Catalogue::validate`](crate::catalogue::Catalogue::validate))
//! - `unfinished`: entries still waiting for a translator
//! - `markers`: `%1` place markers and `&` accelerators

pub mod consistency;
pub mod markers;
pub mod unfinished;
