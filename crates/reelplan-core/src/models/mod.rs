//! Data models for offers and generated plans.
//!
//! This module contains the input side ([`FormInput`] with its [`Platform`]
//! and [`Tone`] selections and the [`LengthPreset`] catalog) and the output
//! side ([`GeneratedPlan`] and its parts) of the generator. Display
//! implementations for the output models live in [`crate::display`] to keep
//! data structures separate from presentation.
//!
//! # Serialization
//!
//! Both sides serialize with camelCase field names so a form posted as JSON
//! and the plan returned for it share one naming scheme:
//!
//! ```rust
//! use reelplan_core::models::FormInput;
//!
//! let form = FormInput::from_json_str(
//!     r#"{
//!         "productName": "Clip Vault",
//!         "productDescription": "stock clip library",
//!         "audience": "faceless creators",
//!         "platform": "YouTube Shorts",
//!         "tone": "Hype"
//!     }"#,
//! )
//! .unwrap();
//! assert_eq!(form.desired_length, "30");
//! assert!(form.affiliate_link().is_none());
//! ```

pub mod beat;
pub mod form;
pub mod plan;
pub mod preset;


pub use beat::{BeatLabel, MIN_BEAT_SECONDS};
pub use form::{FormInput, Platform, Tone};
pub use plan::{ContentAngle, GeneratedPlan, ScheduleSlot, ScriptBeat};
pub use preset::{LengthPreset, DEFAULT_LENGTH_ID};
