//! Display implementations for generated plan models.
//!
//! This module contains the Display trait implementations for the plan
//! models, separated from the model definitions to keep data structures and
//! presentation apart.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - One `##` section per plan part, in the order a creator works through them
//! - Beats as `###` headings carrying their duration

use std::fmt;

use crate::{
    models::{ContentAngle, GeneratedPlan, ScheduleSlot, ScriptBeat},
    text::humanize_seconds,
};

/// Write `items` as a Markdown bullet list followed by a blank line.
fn write_bullets(f: &mut fmt::Formatter<'_>, items: &[String]) -> fmt::Result {
    for item in items {
        writeln!(f, "- {item}")?;
    }
    writeln!(f)
}

impl fmt::Display for ScriptBeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} ({})",
            self.label,
            humanize_seconds(f64::from(self.duration))
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.voiceover)?;
        writeln!(f)?;

        writeln!(f, "#### B-roll ideas")?;
        writeln!(f)?;
        write_bullets(f, &self.broll_ideas)?;

        writeln!(f, "#### Overlays")?;
        writeln!(f)?;
        write_bullets(f, &self.overlays)
    }
}

impl fmt::Display for ContentAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- **Hook**: {}", self.hook)?;
        writeln!(f, "- **Voiceover**: {}", self.voiceover)?;
        writeln!(f, "- **Caption**: {}", self.caption)?;
        writeln!(f)
    }
}

impl fmt::Display for ScheduleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}**: {} ({})", self.day, self.concept, self.objective)
    }
}

impl fmt::Display for GeneratedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.quick_summary)?;
        writeln!(f)?;

        writeln!(f, "## Hooks")?;
        writeln!(f)?;
        for (index, hook) in self.hooks.iter().enumerate() {
            writeln!(f, "{}. {hook}", index + 1)?;
        }
        writeln!(f)?;

        writeln!(f, "## Beat-by-beat timeline")?;
        writeln!(f)?;
        writeln!(
            f,
            "Total runtime: {}",
            humanize_seconds(f64::from(self.total_duration()))
        )?;
        writeln!(f)?;
        for beat in &self.script_beats {
            write!(f, "{beat}")?;
        }

        writeln!(f, "## Multi-platform angles")?;
        writeln!(f)?;
        for angle in &self.content_angles {
            write!(f, "{angle}")?;
        }

        writeln!(f, "## Caption + hashtag stack")?;
        writeln!(f)?;
        for line in self.caption.lines() {
            if line.is_empty() {
                writeln!(f, ">")?;
            } else {
                writeln!(f, "> {line}")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "{}", self.hashtags.join(" "))?;
        writeln!(f)?;

        writeln!(f, "## Overlay stack")?;
        writeln!(f)?;
        write_bullets(f, &self.overlay_text_stack)?;

        writeln!(f, "## CTA blueprint")?;
        writeln!(f)?;
        writeln!(f, "{}", self.call_to_action)?;
        writeln!(f)?;

        writeln!(f, "## Automation stack")?;
        writeln!(f)?;
        write_bullets(f, &self.automation_stack)?;

        writeln!(f, "## Thumbnail prompts")?;
        writeln!(f)?;
        write_bullets(f, &self.thumbnail_prompts)?;

        writeln!(f, "## Upload checklist")?;
        writeln!(f)?;
        for item in &self.upload_checklist {
            writeln!(f, "- [ ] {item}")?;
        }
        writeln!(f)?;

        writeln!(f, "## Posting cadence")?;
        writeln!(f)?;
        for slot in &self.schedule {
            writeln!(f, "- {slot}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BeatLabel;

    fn create_test_beat() -> ScriptBeat {
        ScriptBeat {
            label: BeatLabel::ProofDemo,
            duration: 8,
            voiceover: "Walk through it".to_string(),
            broll_ideas: vec!["Side-by-side before/after".to_string()],
            overlays: vec!["Hook • Proof • CTA framework".to_string()],
        }
    }

    #[test]
    fn test_script_beat_display() {
        let output = create_test_beat().to_string();
        assert!(output.starts_with("### Proof / Demo (8s)\n"));
        assert!(output.contains("#### B-roll ideas\n\n- Side-by-side before/after\n"));
        assert!(output.contains("#### Overlays\n\n- Hook • Proof • CTA framework\n"));
    }

    #[test]
    fn test_content_angle_display() {
        let angle = ContentAngle {
            title: "Pain > Relief".to_string(),
            hook: "POV: no more filming".to_string(),
            voiceover: "Call it out".to_string(),
            caption: "Link in bio".to_string(),
        };
        let output = angle.to_string();
        assert!(output.contains("### Pain > Relief"));
        assert!(output.contains("- **Hook**: POV: no more filming"));
        assert!(output.contains("- **Caption**: Link in bio"));
    }

    #[test]
    fn test_schedule_slot_display() {
        let slot = ScheduleSlot {
            day: "Day 3".to_string(),
            concept: "Automation walkthrough".to_string(),
            objective: "Educate".to_string(),
        };
        assert_eq!(slot.to_string(), "**Day 3**: Automation walkthrough (Educate)");
    }
}
