//! Script beat labels and their timing blueprint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum length of any beat, in seconds.
pub const MIN_BEAT_SECONDS: u32 = 3;

/// One segment of the five-beat short-form script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeatLabel {
    #[serde(rename = "Hook")]
    Hook,
    #[serde(rename = "Problem")]
    Problem,
    #[serde(rename = "Solution Setup")]
    SolutionSetup,
    #[serde(rename = "Proof / Demo")]
    ProofDemo,
    #[serde(rename = "CTA")]
    Cta,
}

impl BeatLabel {
    /// Beats in script order.
    pub const BLUEPRINT: [BeatLabel; 5] = [
        BeatLabel::Hook,
        BeatLabel::Problem,
        BeatLabel::SolutionSetup,
        BeatLabel::ProofDemo,
        BeatLabel::Cta,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BeatLabel::Hook => "Hook",
            BeatLabel::Problem => "Problem",
            BeatLabel::SolutionSetup => "Solution Setup",
            BeatLabel::ProofDemo => "Proof / Demo",
            BeatLabel::Cta => "CTA",
        }
    }

    /// Share of the total runtime given to this beat. The ratios of the
    /// blueprint sum to 1.0.
    pub fn ratio(&self) -> f64 {
        match self {
            BeatLabel::Hook => 0.2,
            BeatLabel::Problem => 0.2,
            BeatLabel::SolutionSetup => 0.18,
            BeatLabel::ProofDemo => 0.27,
            BeatLabel::Cta => 0.15,
        }
    }

    /// Indices into the overlay phrase bank shown during this beat.
    pub fn overlay_slots(&self) -> (usize, usize) {
        match self {
            BeatLabel::Hook => (0, 3),
            BeatLabel::Problem | BeatLabel::SolutionSetup => (1, 3),
            BeatLabel::ProofDemo => (1, 4),
            BeatLabel::Cta => (2, 3),
        }
    }

    /// Seconds allotted to this beat in a video of `total_seconds`.
    ///
    /// ```rust
    /// use reelplan_core::BeatLabel;
    ///
    /// assert_eq!(BeatLabel::ProofDemo.duration_for(60), 16);
    /// assert_eq!(BeatLabel::Cta.duration_for(15), 3);
    /// ```
    pub fn duration_for(&self, total_seconds: u32) -> u32 {
        let seconds = (f64::from(total_seconds) * self.ratio()).round();
        (seconds as u32).max(MIN_BEAT_SECONDS)
    }
}

impl fmt::Display for BeatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
