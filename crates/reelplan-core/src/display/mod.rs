//! Display formatting for generated plans and option catalogs.
//!
//! This module combines direct Display implementations on the plan models
//! with wrapper types that add context, so the CLI and the MCP server print
//! exactly the same Markdown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Plan Models    │    │ Wrapper Types   │    │   Formatted     │
//! │ (GeneratedPlan) │───▶│ (PlanReport,    │───▶│    Output       │
//! │                 │    │  Catalog)       │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for the plan models
//! - [`results`]: [`PlanReport`], a plan with its platform and preset header
//! - [`collections`]: [`Catalog`], the selectable presets, platforms and tones
//!
//! All formatters produce Markdown for rich terminal display.

pub mod collections;
pub mod models;
pub mod results;

pub use collections::Catalog;
pub use results::PlanReport;
