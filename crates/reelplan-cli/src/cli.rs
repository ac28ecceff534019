//! Command-line argument wrappers and command handlers
//!
//! This module implements the CLI side of the parameter wrapper pattern:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Plan Generator
//! ```
//!
//! Core parameter types stay free of clap derives. The wrappers here add
//! flags, help text and value enums, then convert into
//! [`reelplan_core::GeneratePlan`] explicitly.

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use log::{debug, info};
use reelplan_core::{
    display::{Catalog, PlanReport},
    FormInput, GeneratePlan, GeneratedPlan, Platform, Tone,
};
use serde::Serialize;

use crate::renderer::TerminalRenderer;

/// Generate a faceless video plan
///
/// Starts from an empty form, the built-in sample offer (--sample) or a JSON
/// form file (--form), then applies the individual field flags on top.
#[derive(Args, Default)]
pub struct GenerateArgs {
    /// JSON form file with camelCase FormInput fields ("-" reads stdin)
    #[arg(long, value_name = "PATH", conflicts_with = "sample")]
    pub form: Option<PathBuf>,
    /// Start from the built-in sample offer
    #[arg(long)]
    pub sample: bool,
    #[arg(short = 'n', long, help = "Name of the promoted product")]
    pub product_name: Option<String>,
    #[arg(short, long, help = "What the product does in one or two sentences")]
    pub description: Option<String>,
    #[arg(short, long, help = "Who the video is for")]
    pub audience: Option<String>,
    /// Core benefit (repeatable, or comma-separated)
    #[arg(short, long = "benefit", value_name = "BENEFIT")]
    pub benefits: Vec<String>,
    /// Pain point the product removes (repeatable, or comma-separated)
    #[arg(short, long = "pain-point", value_name = "PAIN_POINT")]
    pub pain_points: Vec<String>,
    #[arg(short = 'k', long, help = "Affiliate link or link-in-bio text")]
    pub link: Option<String>,
    #[arg(short, long, value_enum, help = "Video length in seconds")]
    pub length: Option<LengthArg>,
    #[arg(long, value_enum, help = "Primary platform")]
    pub platform: Option<PlatformArg>,
    #[arg(short, long, value_enum, help = "Tone of the voiceover and edit")]
    pub tone: Option<ToneArg>,
    /// Seed for reproducible hook, overlay and soundtrack picks
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    /// Convert CLI arguments to core parameters, reading the form file if
    /// one was given.
    pub fn into_params(self) -> Result<GeneratePlan> {
        let mut form = match &self.form {
            Some(path) if path.as_os_str() == "-" => {
                let json = io::read_to_string(io::stdin()).context("Failed to read form from stdin")?;
                FormInput::from_json_str(&json).context("Failed to parse form from stdin")?
            }
            Some(path) => FormInput::from_path(path)
                .with_context(|| format!("Failed to load form from {}", path.display()))?,
            None if self.sample => FormInput::sample(),
            None => FormInput::default(),
        };

        if let Some(name) = self.product_name {
            form.product_name = name;
        }
        if let Some(description) = self.description {
            form.product_description = description;
        }
        if let Some(audience) = self.audience {
            form.audience = audience;
        }
        if !self.benefits.is_empty() {
            form.benefits = self.benefits.join("\n");
        }
        if !self.pain_points.is_empty() {
            form.pain_points = self.pain_points.join("\n");
        }
        if let Some(link) = self.link {
            form.affiliate_link = link;
        }
        if let Some(length) = self.length {
            form.desired_length = length.id().to_string();
        }
        if let Some(platform) = self.platform {
            form.platform = platform.into();
        }
        if let Some(tone) = self.tone {
            form.tone = tone.into();
        }

        Ok(GeneratePlan {
            form,
            seed: self.seed,
        })
    }
}

/// Command-line representation of the length presets
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LengthArg {
    /// 15s Flash Promo
    #[value(name = "15")]
    Flash,
    /// 30s Scroll Stopper
    #[value(name = "30")]
    ScrollStopper,
    /// 45s Story Mode
    #[value(name = "45")]
    StoryMode,
    /// 60s Deep Dive
    #[value(name = "60")]
    DeepDive,
}

impl LengthArg {
    pub fn id(&self) -> &'static str {
        match self {
            LengthArg::Flash => "15",
            LengthArg::ScrollStopper => "30",
            LengthArg::StoryMode => "45",
            LengthArg::DeepDive => "60",
        }
    }
}

/// Command-line representation of the platforms
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    #[value(name = "tiktok")]
    TikTok,
    InstagramReels,
    #[value(name = "youtube-shorts")]
    YouTubeShorts,
    PinterestIdeaPin,
}

impl From<PlatformArg> for Platform {
    fn from(val: PlatformArg) -> Self {
        match val {
            PlatformArg::TikTok => Platform::TikTok,
            PlatformArg::InstagramReels => Platform::InstagramReels,
            PlatformArg::YouTubeShorts => Platform::YouTubeShorts,
            PlatformArg::PinterestIdeaPin => Platform::PinterestIdeaPin,
        }
    }
}

/// Command-line representation of the tones
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ToneArg {
    Hype,
    Trustworthy,
    Educational,
    Relaxed,
}

impl From<ToneArg> for Tone {
    fn from(val: ToneArg) -> Self {
        match val {
            ToneArg::Hype => Tone::Hype,
            ToneArg::Trustworthy => Tone::Trustworthy,
            ToneArg::Educational => Tone::Educational,
            ToneArg::Relaxed => Tone::Relaxed,
        }
    }
}

#[derive(Serialize)]
struct ToneEntry {
    name: Tone,
    flavor: &'static str,
}

#[derive(Serialize)]
struct CatalogJson {
    lengths: &'static [reelplan_core::LengthPreset],
    platforms: [Platform; 4],
    tones: Vec<ToneEntry>,
}

/// Command handlers writing Markdown through the terminal renderer, or JSON
pub struct Cli {
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer, json: bool) -> Self {
        Self { renderer, json }
    }

    /// Generate a plan and print it.
    pub fn generate(&self, args: GenerateArgs) -> Result<()> {
        let params = args.into_params()?;
        debug!("generate: {:?}", params);

        let plan = params
            .generator()
            .generate_checked(&params.form)
            .context("Failed to generate plan")?;
        info!(
            "Generated plan for '{}' ({} beats, {}s)",
            params.form.product_name,
            plan.script_beats.len(),
            plan.total_duration()
        );

        self.print_plan(&params.form, &plan)
    }

    fn print_plan(&self, form: &FormInput, plan: &GeneratedPlan) -> Result<()> {
        if self.json {
            let json = serde_json::to_string_pretty(plan).context("Failed to serialize plan")?;
            println!("{json}");
            Ok(())
        } else {
            self.renderer.render(&PlanReport::new(form, plan).to_string())
        }
    }

    /// List every selectable length, platform and tone.
    pub fn presets(&self) -> Result<()> {
        let catalog = Catalog;
        if self.json {
            let payload = CatalogJson {
                lengths: catalog.presets(),
                platforms: catalog.platforms(),
                tones: catalog
                    .tones()
                    .into_iter()
                    .map(|tone| ToneEntry {
                        name: tone,
                        flavor: tone.flavor(),
                    })
                    .collect(),
            };
            let json =
                serde_json::to_string_pretty(&payload).context("Failed to serialize presets")?;
            println!("{json}");
            Ok(())
        } else {
            self.renderer.render(&catalog.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_sample() {
        let args = GenerateArgs {
            sample: true,
            product_name: Some("Clip Vault".to_string()),
            benefits: vec!["Huge library".to_string(), "Commercial license".to_string()],
            length: Some(LengthArg::DeepDive),
            platform: Some(PlatformArg::YouTubeShorts),
            tone: Some(ToneArg::Hype),
            seed: Some(4),
            ..GenerateArgs::default()
        };
        let params = args.into_params().unwrap();

        assert_eq!(params.form.product_name, "Clip Vault");
        assert_eq!(params.form.audience, FormInput::sample().audience);
        assert_eq!(params.form.benefits, "Huge library\nCommercial license");
        assert_eq!(params.form.desired_length, "60");
        assert_eq!(params.form.platform, Platform::YouTubeShorts);
        assert_eq!(params.form.tone, Tone::Hype);
        assert_eq!(params.seed, Some(4));
    }

    #[test]
    fn test_empty_args_give_blank_form() {
        let params = GenerateArgs::default().into_params().unwrap();
        assert_eq!(params.form, FormInput::default());
        assert!(params.form.validate().is_err());
    }

    #[test]
    fn test_form_file_is_loaded() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("offer.json");
        std::fs::write(
            &path,
            r#"{"productName": "A", "productDescription": "b", "audience": "c", "tone": "Relaxed"}"#,
        )
        .expect("Failed to write form");

        let args = GenerateArgs {
            form: Some(path),
            audience: Some("night owls".to_string()),
            ..GenerateArgs::default()
        };
        let params = args.into_params().unwrap();
        assert_eq!(params.form.product_name, "A");
        assert_eq!(params.form.audience, "night owls");
        assert_eq!(params.form.tone, Tone::Relaxed);
    }

    #[test]
    fn test_missing_form_file_reports_path() {
        let args = GenerateArgs {
            form: Some(PathBuf::from("/nonexistent/offer.json")),
            ..GenerateArgs::default()
        };
        let err = args.into_params().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/offer.json"));
    }

    #[test]
    fn test_platform_value_names() {
        let names: Vec<String> = PlatformArg::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["tiktok", "instagram-reels", "youtube-shorts", "pinterest-idea-pin"]
        );
    }
}
