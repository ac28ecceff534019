//! Offer form model: the user supplied attributes a plan is generated from.

use std::{fs, path::Path, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{preset::DEFAULT_LENGTH_ID, LengthPreset};
use crate::{
    error::{ReelplanError, Result},
    text::parse_list,
};

/// Platform the video will be published on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Platform {
    #[default]
    #[serde(rename = "TikTok")]
    TikTok,
    #[serde(rename = "Instagram Reels")]
    InstagramReels,
    #[serde(rename = "YouTube Shorts")]
    YouTubeShorts,
    #[serde(rename = "Pinterest Idea Pin")]
    PinterestIdeaPin,
}

impl Platform {
    /// Every supported platform, in menu order.
    pub const ALL: [Platform; 4] = [
        Platform::TikTok,
        Platform::InstagramReels,
        Platform::YouTubeShorts,
        Platform::PinterestIdeaPin,
    ];

    /// Display name, also used inside generated copy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::TikTok => "TikTok",
            Platform::InstagramReels => "Instagram Reels",
            Platform::YouTubeShorts => "YouTube Shorts",
            Platform::PinterestIdeaPin => "Pinterest Idea Pin",
        }
    }
}

impl FromStr for Platform {
    type Err = ReelplanError;

    /// Accepts the display name or its kebab-case form, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('-', " ");
        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str().to_lowercase() == wanted)
            .ok_or_else(|| {
                ReelplanError::invalid_input("platform")
                    .with_reason(format!("unknown platform '{s}'"))
            })
    }
}

/// Voice and pacing of the video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Tone {
    Hype,
    Trustworthy,
    #[default]
    Educational,
    Relaxed,
}

impl Tone {
    /// Every supported tone, in menu order.
    pub const ALL: [Tone; 4] = [Tone::Hype, Tone::Trustworthy, Tone::Educational, Tone::Relaxed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Hype => "Hype",
            Tone::Trustworthy => "Trustworthy",
            Tone::Educational => "Educational",
            Tone::Relaxed => "Relaxed",
        }
    }

    /// Style direction appended to the plan summary.
    pub fn flavor(&self) -> &'static str {
        match self {
            Tone::Hype => "energetic and punchy voiceover with fast cuts",
            Tone::Trustworthy => "calm pacing with clean typography overlays",
            Tone::Educational => "step-by-step voiceover with on-screen text summaries",
            Tone::Relaxed => "softer pacing with cozy visuals and soft gradients",
        }
    }
}

impl FromStr for Tone {
    type Err = ReelplanError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().to_lowercase() == wanted)
            .ok_or_else(|| {
                ReelplanError::invalid_input("tone").with_reason(format!("unknown tone '{s}'"))
            })
    }
}

fn default_length() -> String {
    DEFAULT_LENGTH_ID.to_string()
}

/// Offer attributes collected from the user.
///
/// `benefits` and `pain_points` are free text holding one entry per line or
/// comma. An empty `affiliate_link` means no link was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    /// Name of the promoted product (required)
    pub product_name: String,
    /// What the product does in one or two sentences (required)
    pub product_description: String,
    /// Who the video is for (required)
    pub audience: String,
    /// Core benefits, one per line or comma
    #[serde(default)]
    pub benefits: String,
    /// Pain points, one per line or comma
    #[serde(default)]
    pub pain_points: String,
    /// Optional affiliate link or "link in bio" text
    #[serde(default)]
    pub affiliate_link: String,
    /// Length preset id: "15", "30", "45" or "60"
    #[serde(default = "default_length")]
    pub desired_length: String,
    /// Primary platform
    #[serde(default)]
    pub platform: Platform,
    /// Tone of the voiceover and edit
    #[serde(default)]
    pub tone: Tone,
}

impl Default for FormInput {
    /// An empty form with the default length, platform and tone selected.
    fn default() -> Self {
        Self {
            product_name: String::new(),
            product_description: String::new(),
            audience: String::new(),
            benefits: String::new(),
            pain_points: String::new(),
            affiliate_link: String::new(),
            desired_length: default_length(),
            platform: Platform::default(),
            tone: Tone::default(),
        }
    }
}

impl FormInput {
    /// Pre-filled example offer.
    pub fn sample() -> Self {
        Self {
            product_name: "Instant Funnel OS".to_string(),
            product_description: "Automation dashboard for affiliate marketers".to_string(),
            audience: "busy side hustlers".to_string(),
            benefits: ["Done-for-you funnel templates", "Daily content scripts"].join("\n"),
            pain_points: ["No time to film", "Scared of showing face"].join("\n"),
            affiliate_link: "mybio.io/funnel-os".to_string(),
            desired_length: LengthPreset::default_preset().id.to_string(),
            platform: Platform::TikTok,
            tone: Tone::Educational,
        }
    }

    /// Parse a form from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a form from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ReelplanError::FileSystem` if the file cannot be read and
    /// `ReelplanError::Serialization` if it is not a valid form.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| ReelplanError::FileSystem {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject forms missing any of the required text fields.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("productName", &self.product_name),
            ("productDescription", &self.product_description),
            ("audience", &self.audience),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ReelplanError::invalid_input(field).with_reason("must not be empty"));
            }
        }
        Ok(())
    }

    pub fn benefit_list(&self) -> Vec<String> {
        parse_list(&self.benefits)
    }

    pub fn pain_point_list(&self) -> Vec<String> {
        parse_list(&self.pain_points)
    }

    /// The affiliate link, if one was supplied.
    pub fn affiliate_link(&self) -> Option<&str> {
        Some(self.affiliate_link.as_str()).filter(|link| !link.is_empty())
    }

    /// The selected length preset, with the 30 second fallback.
    pub fn length_preset(&self) -> &'static LengthPreset {
        LengthPreset::resolve(&self.desired_length)
    }
}
