//! Generated plan model definition.

use serde::{Deserialize, Serialize};

use super::BeatLabel;

/// One timed segment of the video script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScriptBeat {
    pub label: BeatLabel,

    /// Length of the beat in seconds (at least 3)
    pub duration: u32,

    /// What the narrator says
    pub voiceover: String,

    /// Footage suggestions
    pub broll_ideas: Vec<String>,

    /// On-screen text
    pub overlays: Vec<String>,
}

/// An alternate framing of the same offer for a follow-up post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentAngle {
    pub title: String,
    pub hook: String,
    pub voiceover: String,
    pub caption: String,
}

/// One slot of the posting cadence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleSlot {
    pub day: String,
    pub concept: String,
    pub objective: String,
}

/// Complete faceless video plan derived from a single form snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    /// Opening lines, in template order
    pub hooks: Vec<String>,

    /// One-line overview of product, platform, preset and tone
    pub quick_summary: String,

    pub script_beats: Vec<ScriptBeat>,

    pub content_angles: Vec<ContentAngle>,

    pub call_to_action: String,

    /// Bank of overlay phrases the beats draw from
    pub overlay_text_stack: Vec<String>,

    /// Multi-line post caption
    pub caption: String,

    pub hashtags: Vec<String>,

    pub upload_checklist: Vec<String>,

    pub schedule: Vec<ScheduleSlot>,

    pub automation_stack: Vec<String>,

    pub thumbnail_prompts: Vec<String>,
}

impl GeneratedPlan {
    /// Sum of all beat durations in seconds.
    pub fn total_duration(&self) -> u32 {
        self.script_beats.iter().map(|beat| beat.duration).sum()
    }
}
