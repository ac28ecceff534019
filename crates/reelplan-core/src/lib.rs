//! Core library for the reelplan faceless video planner.
//!
//! This crate turns a short description of an affiliate offer into a complete
//! faceless short-form video plan: hooks, a timed five-beat script, reusable
//! content angles, caption and hashtags, checklists and a posting cadence.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): the offer form and the generated plan
//! - **Display Wrappers** ([`display`]): Markdown formatting shared by the
//!   CLI's terminal renderer and the MCP server
//!
//! # Quick Start
//!
//! ```rust
//! use reelplan_core::{display::PlanReport, FormInput, PlanGeneratorBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let form = FormInput {
//!     product_name: "Clip Vault".to_string(),
//!     product_description: "stock clip library for creators".to_string(),
//!     audience: "faceless creators".to_string(),
//!     benefits: "10k vertical clips\nCommercial license".to_string(),
//!     ..FormInput::sample()
//! };
//!
//! let mut generator = PlanGeneratorBuilder::new().build();
//! let plan = generator.generate_checked(&form)?;
//! println!("{}", PlanReport::new(&form, &plan));
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod text;

// Re-export commonly used types
pub use display::{Catalog, PlanReport};
pub use error::{ReelplanError, Result};
pub use generator::{
    FirstChoice, PlanGenerator, PlanGeneratorBuilder, RandomSource, SeededRandom, SequenceRandom,
    ThreadRandom,
};
pub use models::{
    BeatLabel, ContentAngle, FormInput, GeneratedPlan, LengthPreset, Platform, ScheduleSlot,
    ScriptBeat, Tone, MIN_BEAT_SECONDS,
};
pub use params::GeneratePlan;
