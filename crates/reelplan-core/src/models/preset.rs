//! Length preset catalog.

use log::warn;
use serde::Serialize;

/// Identifier of the preset used when a requested length is unknown.
pub const DEFAULT_LENGTH_ID: &str = "30";

/// A fixed video-length option offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthPreset {
    /// Identifier submitted with the form ("15", "30", ...)
    pub id: &'static str,
    /// Human readable label
    pub label: &'static str,
    /// Total runtime in seconds
    pub seconds: u32,
    /// What a video of this length is expected to deliver
    pub promise: &'static str,
}

const LENGTH_PRESETS: [LengthPreset; 4] = [
    LengthPreset {
        id: "15",
        label: "15s Flash Promo",
        seconds: 15,
        promise: "punchy hook and single proof point",
    },
    LengthPreset {
        id: "30",
        label: "30s Scroll Stopper",
        seconds: 30,
        promise: "problem > solution > CTA arc",
    },
    LengthPreset {
        id: "45",
        label: "45s Story Mode",
        seconds: 45,
        promise: "mini story with stacked benefits",
    },
    LengthPreset {
        id: "60",
        label: "60s Deep Dive",
        seconds: 60,
        promise: "full walkthrough and objection crush",
    },
];

impl LengthPreset {
    /// All presets, shortest first.
    pub fn all() -> &'static [LengthPreset] {
        &LENGTH_PRESETS
    }

    /// Look up a preset by its identifier.
    pub fn find(id: &str) -> Option<&'static LengthPreset> {
        LENGTH_PRESETS.iter().find(|preset| preset.id == id)
    }

    /// The 30 second preset.
    pub fn default_preset() -> &'static LengthPreset {
        &LENGTH_PRESETS[1]
    }

    /// Look up a preset, falling back to the 30 second preset for unknown
    /// identifiers.
    pub fn resolve(id: &str) -> &'static LengthPreset {
        Self::find(id).unwrap_or_else(|| {
            warn!("Unknown length preset '{id}', using {DEFAULT_LENGTH_ID}s");
            Self::default_preset()
        })
    }

    /// One-line description shown next to the length selector.
    ///
    /// ```rust
    /// use reelplan_core::LengthPreset;
    ///
    /// let preset = LengthPreset::resolve("45");
    /// assert_eq!(
    ///     preset.hint(),
    ///     "This preset leans on a 45s timeline focused on mini story with stacked benefits."
    /// );
    /// ```
    pub fn hint(&self) -> String {
        format!(
            "This preset leans on a {}s timeline focused on {}.",
            self.seconds, self.promise
        )
    }
}
