//! Collection wrapper types for displaying the selectable options.
//!
//! This module provides the [`Catalog`] wrapper listing every length preset,
//! platform and tone a form may select.

use std::fmt;

use crate::models::{LengthPreset, Platform, Tone};

/// Newtype wrapper for displaying the option catalogs.
///
/// # Examples
///
/// ```rust
/// use reelplan_core::display::Catalog;
///
/// let output = Catalog.to_string();
/// assert!(output.contains("## Video lengths"));
/// assert!(output.contains("- Instagram Reels"));
/// assert!(output.contains("**Relaxed**"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn presets(&self) -> &'static [LengthPreset] {
        LengthPreset::all()
    }

    pub fn platforms(&self) -> [Platform; 4] {
        Platform::ALL
    }

    pub fn tones(&self) -> [Tone; 4] {
        Tone::ALL
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Presets")?;
        writeln!(f)?;

        writeln!(f, "## Video lengths")?;
        writeln!(f)?;
        for preset in self.presets() {
            writeln!(f, "- **{}** (`{}`): {}", preset.label, preset.id, preset.hint())?;
        }
        writeln!(f)?;

        writeln!(f, "## Platforms")?;
        writeln!(f)?;
        for platform in self.platforms() {
            writeln!(f, "- {}", platform.as_str())?;
        }
        writeln!(f)?;

        writeln!(f, "## Tones")?;
        writeln!(f)?;
        for tone in self.tones() {
            writeln!(f, "- **{}**: {}", tone.as_str(), tone.flavor())?;
        }

        Ok(())
    }
}
