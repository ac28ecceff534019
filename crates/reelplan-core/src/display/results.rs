//! Result wrapper types for displaying generated plans in context.

use std::fmt;

use crate::models::{FormInput, GeneratedPlan, LengthPreset, Platform};

/// Wrapper type for displaying a generated plan together with the selection
/// it was generated for.
///
/// The wrapper formats the plan with:
/// - A top-level heading
/// - The platform and length preset the plan targets
/// - The full plan sections
///
/// # Examples
///
/// ```rust
/// use reelplan_core::{display::PlanReport, FormInput, PlanGenerator};
///
/// let form = FormInput::sample();
/// let plan = PlanGenerator::default().generate(&form);
///
/// let report = PlanReport::new(&form, &plan);
/// let output = report.to_string();
/// assert!(output.starts_with("# Faceless workflow ready"));
/// assert!(output.contains("TikTok · 30s Scroll Stopper"));
/// ```
pub struct PlanReport<'a> {
    pub plan: &'a GeneratedPlan,
    pub platform: Platform,
    pub preset: &'static LengthPreset,
}

impl<'a> PlanReport<'a> {
    /// Create a report for `plan`, generated from `form`.
    pub fn new(form: &FormInput, plan: &'a GeneratedPlan) -> Self {
        Self {
            plan,
            platform: form.platform,
            preset: form.length_preset(),
        }
    }
}

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Faceless workflow ready")?;
        writeln!(f)?;
        writeln!(f, "{} · {}", self.platform.as_str(), self.preset.label)?;
        writeln!(f)?;
        write!(f, "{}", self.plan)
    }
}
