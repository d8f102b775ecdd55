//! # Labelpress Architecture
//!
//! Labelpress is a **UI-agnostic label-generation library**. This is not a
//! CLI application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade owning the session (catalog + selection)     │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (catalog, selection, render)                          │
//! │  - Catalog index: pure facet derivation over a flat list    │
//! │  - Selection machine: cascade-resetting facet aggregate     │
//! │  - Compositor: label → sheet raster → document bytes        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Cascade
//!
//! Facets form a fixed order (brand, collection, series, color name, color
//! number, finish) and every write at one level resets everything below it.
//! The selection has exactly one mutation entry point so that invariant holds
//! on every path. See `selection.rs`.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` types, never writes to stdout/stderr, and never calls
//! `std::process::exit`. The same core could back a GUI or a service.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`catalog`]: Catalog parsing and facet listing
//! - [`selection`]: Facet selection state machine and record resolution
//! - [`render`]: Label compositor, sheet tiling, document assembly
//! - [`templates`]: Template id → asset path mapping
//! - [`model`]: Core data types (`CatalogRecord`, `FacetLevel`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod selection;
pub mod templates;
