//! Plan generation: expands an offer form into a faceless video plan.
//!
//! This module provides [`PlanGenerator`], a pure transformation from a
//! [`FormInput`] snapshot to a [`GeneratedPlan`]. It performs no I/O and keeps
//! no state between calls apart from its [`RandomSource`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   FormInput     │    │ TemplateContext │    │  GeneratedPlan  │
//! │ (user offer)    │───▶│ (hero benefit,  │───▶│ (hooks, beats,  │
//! │                 │    │  core pain, ..) │    │  captions, ..)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                 ▲
//!                                 │ four picks per plan
//!                        ┌─────────────────┐
//!                        │  RandomSource   │
//!                        └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`PlanGenerator`] instances
//! - [`random`]: The [`RandomSource`] strategy and its implementations
//! - [`templates`]: Copy templates for each plan section
//!
//! # Random picks
//!
//! Each plan consumes exactly four picks, in this order: the lead-in of the
//! second hook, the third overlay phrase, the hook of the first content angle,
//! and the soundtrack of the upload checklist.
//!
//! # Example
//!
//! ```rust
//! use reelplan_core::{FormInput, PlanGeneratorBuilder};
//!
//! let mut generator = PlanGeneratorBuilder::new().with_seed(Some(42)).build();
//! let plan = generator.generate_checked(&FormInput::sample()).unwrap();
//!
//! assert_eq!(plan.script_beats.len(), 5);
//! assert_eq!(plan.hashtags[4], "#instantfunnelos");
//! ```

pub mod builder;
pub mod random;
pub mod templates;

#[cfg(test)]
mod tests;

use log::debug;

pub use builder::PlanGeneratorBuilder;
pub use random::{choose, FirstChoice, RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
use templates::{TemplateContext, FACELESS_OVERLAYS, HOOK_LEAD_INS, MUSIC_GENRES};

use crate::{
    error::Result,
    models::{BeatLabel, FormInput, GeneratedPlan, ScriptBeat},
};

/// Generator turning offer forms into video plans.
pub struct PlanGenerator {
    rng: Box<dyn RandomSource + Send>,
}

impl PlanGenerator {
    /// Creates a generator drawing its random picks from `rng`.
    pub fn new(rng: impl RandomSource + Send + 'static) -> Self {
        Self { rng: Box::new(rng) }
    }

    /// Validate the form, then generate a plan for it.
    ///
    /// # Errors
    ///
    /// Returns `ReelplanError::InvalidInput` if a required field is empty.
    pub fn generate_checked(&mut self, form: &FormInput) -> Result<GeneratedPlan> {
        form.validate()?;
        Ok(self.generate(form))
    }

    /// Generate a plan without validating the form.
    ///
    /// Never fails: empty required fields only produce awkward copy. An
    /// unknown length id falls back to the 30 second preset.
    pub fn generate(&mut self, form: &FormInput) -> GeneratedPlan {
        let preset = form.length_preset();
        let ctx = TemplateContext::new(form, preset);
        debug!(
            "Generating plan for '{}' ({}s, {}, {})",
            form.product_name,
            preset.seconds,
            form.platform.as_str(),
            form.tone.as_str()
        );

        let lead_in = choose(&HOOK_LEAD_INS, HOOK_LEAD_INS[0], self.rng.as_mut());
        let hooks = templates::hooks(&ctx, lead_in);

        let faceless = choose(&FACELESS_OVERLAYS, FACELESS_OVERLAYS[1], self.rng.as_mut());
        let overlay_text_stack = templates::overlay_phrases(&ctx, faceless);

        let script_beats = BeatLabel::BLUEPRINT
            .iter()
            .map(|&label| {
                let (first, second) = label.overlay_slots();
                ScriptBeat {
                    label,
                    duration: label.duration_for(preset.seconds),
                    voiceover: templates::voiceover(label, &ctx, &hooks[0]),
                    broll_ideas: templates::broll_ideas(label, &ctx),
                    overlays: vec![
                        overlay_text_stack[first].clone(),
                        overlay_text_stack[second].clone(),
                    ],
                }
            })
            .collect();

        let angle_hook = choose(&hooks, hooks[0].clone(), self.rng.as_mut());
        let content_angles = templates::content_angles(&ctx, angle_hook);

        let music = choose(&MUSIC_GENRES, MUSIC_GENRES[0], self.rng.as_mut());

        GeneratedPlan {
            quick_summary: templates::quick_summary(&ctx, preset),
            hooks,
            script_beats,
            content_angles,
            call_to_action: templates::call_to_action(&ctx),
            overlay_text_stack,
            caption: templates::caption(&ctx),
            hashtags: templates::hashtags(&ctx),
            upload_checklist: templates::upload_checklist(music),
            schedule: templates::schedule(),
            automation_stack: templates::automation_stack(&ctx),
            thumbnail_prompts: templates::thumbnail_prompts(&ctx),
        }
    }
}

impl Default for PlanGenerator {
    fn default() -> Self {
        Self::new(ThreadRandom)
    }
}
