//! tscat - translation catalogue store for Qt Linguist `.ts` files
//!
//! tscat loads `.ts` catalogues into an in-memory store, answers translation
//! lookups by (context, source text, disambiguation comment), and writes the
//! store back out in the Linguist layout. A running program holds one
//! [`active::ActiveCatalogue`] and swaps it wholesale when the locale changes.
//!
//! ## Module Structure
//!
//! - `catalogue`: entries, context groups and the catalogue store
//! - `format`: `.ts` reader and writer
//! - `translate`: lookup with fallback to the source text
//! - `active`: the process-wide catalogue handle
//! - `workspace`, `context`, `rules`, `issues`: catalogue discovery and checks
//! - `cli`: command-line interface
//! - `config`: `.tscatrc.json` loading
//! - `mcp`: Model Context Protocol server

pub mod active;
pub mod catalogue;
pub mod cli;
pub mod config;
pub mod context;
pub mod format;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod translate;
pub mod workspace;
