//! Parameter structures for reelplan operations
//!
//! This module contains parameter structures shared by the interfaces (CLI,
//! MCP) without framework-specific derives. Interface layers wrap them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation is only compiled in with the `schema` feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{generator::PlanGeneratorBuilder, models::FormInput, PlanGenerator};

/// Parameters for generating a plan.
///
/// The form fields sit at the top level next to the optional seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GeneratePlan {
    #[serde(flatten)]
    pub form: FormInput,
    /// Optional seed making the random picks reproducible
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratePlan {
    /// Build a generator honoring the requested seed.
    pub fn generator(&self) -> PlanGenerator {
        PlanGeneratorBuilder::new().with_seed(self.seed).build()
    }
}

impl From<FormInput> for GeneratePlan {
    fn from(form: FormInput) -> Self {
        Self { form, seed: None }
    }
}
