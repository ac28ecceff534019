//! Tests for the generator module.

use super::*;
use crate::models::{Platform, Tone};

/// Helper function to create a generator that always takes the first option
fn pinned_generator() -> PlanGenerator {
    PlanGeneratorBuilder::new()
        .with_random_source(FirstChoice)
        .build()
}

fn bare_form() -> FormInput {
    FormInput {
        product_name: "Clip Vault".to_string(),
        product_description: "stock clip library for creators".to_string(),
        audience: "faceless creators".to_string(),
        benefits: String::new(),
        pain_points: String::new(),
        affiliate_link: String::new(),
        desired_length: "15".to_string(),
        platform: Platform::YouTubeShorts,
        tone: Tone::Hype,
    }
}

#[test]
fn test_sample_hooks_with_first_choice() {
    let plan = pinned_generator().generate(&FormInput::sample());

    assert_eq!(
        plan.hooks,
        vec![
            "What if busy side hustlers could done-for-you funnel templates in 8s?",
            "POV: No time to film ends with Instant Funnel OS.",
            "Instant Funnel OS hack: done-for-you funnel templates without showing your face.",
            "Stop scrolling—No time to film? Use this tiktok ready plug.",
        ]
    );
}

#[test]
fn test_fifteen_second_teaser_keeps_fraction() {
    let plan = pinned_generator().generate(&bare_form());
    assert_eq!(
        plan.hooks[0],
        "What if faceless creators could stock clip library for creators in 7.5s?"
    );
}

#[test]
fn test_empty_audience_reads_you() {
    let mut form = bare_form();
    form.audience = String::new();
    let plan = pinned_generator().generate(&form);
    assert!(plan.hooks[0].starts_with("What if you could "));
    assert_eq!(
        plan.hooks[1],
        "POV: Struggling to keep up with  ends with Clip Vault."
    );
}

#[test]
fn test_sequence_source_drives_each_pick_in_order() {
    let mut generator = PlanGeneratorBuilder::new()
        .with_random_source(SequenceRandom::new(vec![1, 2, 3, 2]))
        .build();
    let plan = generator.generate(&FormInput::sample());

    assert!(plan.hooks[1].starts_with("If you're: "));
    assert_eq!(plan.overlay_text_stack[2], "Set-and-forget flow");
    assert_eq!(plan.content_angles[0].hook, plan.hooks[3]);
    assert_eq!(
        plan.upload_checklist[4],
        "Add upbeat pop track from royalty-free library;"
    );
}

#[test]
fn test_beats_follow_blueprint() {
    let plan = pinned_generator().generate(&FormInput::sample());

    let labels: Vec<BeatLabel> = plan.script_beats.iter().map(|b| b.label).collect();
    assert_eq!(labels, BeatLabel::BLUEPRINT.to_vec());

    let durations: Vec<u32> = plan.script_beats.iter().map(|b| b.duration).collect();
    assert_eq!(durations, vec![6, 6, 5, 8, 5]);
}

#[test]
fn test_beat_voiceovers() {
    let plan = pinned_generator().generate(&FormInput::sample());
    let voiceovers: Vec<&str> = plan
        .script_beats
        .iter()
        .map(|b| b.voiceover.as_str())
        .collect();

    assert_eq!(
        voiceovers,
        vec![
            "\"What if busy side hustlers could done-for-you funnel templates in 8s?\" with animated captions synced to each word.",
            "Narrate a quick story: \"No time to film. I used to waste hours...\"",
            "Introduce Instant Funnel OS and highlight Done-for-you funnel templates.",
            "Walk through Daily content scripts using captions like \"Watch this...\"",
            "Land the CTA: \"Hit the link for exclusive access\" and reiterate payoff.",
        ]
    );
}

#[test]
fn test_beat_overlays_use_slot_mapping() {
    let plan = pinned_generator().generate(&FormInput::sample());
    let stack = &plan.overlay_text_stack;

    assert_eq!(
        stack,
        &vec![
            "Step-by-step TikTok ready".to_string(),
            "Instant Funnel OS in action".to_string(),
            "No talking head needed".to_string(),
            "Hook • Proof • CTA framework".to_string(),
            "Trust badges & social proof built-in".to_string(),
            "Promote it in under 30s".to_string(),
        ]
    );

    for beat in &plan.script_beats {
        let (first, second) = beat.label.overlay_slots();
        assert_eq!(beat.overlays, vec![stack[first].clone(), stack[second].clone()]);
    }
    assert_eq!(plan.script_beats[4].overlays[0], "No talking head needed");
    assert_eq!(
        plan.script_beats[3].overlays[1],
        "Trust badges & social proof built-in"
    );
}

#[test]
fn test_cta_copy_without_link() {
    let plan = pinned_generator().generate(&bare_form());

    assert_eq!(
        plan.call_to_action,
        "Drop \"FACELINK\" in captions + pin comment directing viewers to your bio."
    );
    assert_eq!(
        plan.script_beats[4].voiceover,
        "Land the CTA: \"Hit the link for the exact tool\" and reiterate payoff."
    );
    assert_eq!(
        plan.script_beats[4].broll_ideas[0],
        "Big CTA card with \"Grab it via my link\""
    );
    assert!(plan.caption.contains("Step 3️⃣ Drop the CTA with your custom link."));
}

#[test]
fn test_proof_beat_defaults_to_core_feature() {
    let plan = pinned_generator().generate(&bare_form());
    assert_eq!(
        plan.script_beats[3].voiceover,
        "Walk through the core feature using captions like \"Watch this...\""
    );
}

#[test]
fn test_single_benefit_is_also_secondary() {
    let mut form = bare_form();
    form.benefits = "Unlimited downloads".to_string();
    let plan = pinned_generator().generate(&form);
    assert_eq!(
        plan.script_beats[3].voiceover,
        "Walk through Unlimited downloads using captions like \"Watch this...\""
    );
    assert_eq!(
        plan.content_angles[2].voiceover,
        "Break down metrics or quotes, then stack benefits Unlimited downloads."
    );
}

#[test]
fn test_content_angles() {
    let plan = pinned_generator().generate(&FormInput::sample());
    let titles: Vec<&str> = plan
        .content_angles
        .iter()
        .map(|a| a.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Pain > Relief", "Behind-the-Automation", "Testimonial Remix"]
    );

    let testimonial = &plan.content_angles[2];
    assert_eq!(
        testimonial.hook,
        "\"I tried Instant Funnel OS for 7 days — here are the receipts.\""
    );
    assert_eq!(
        testimonial.voiceover,
        "Break down metrics or quotes, then stack benefits Done-for-you funnel templates & Daily content scripts."
    );
    assert_eq!(
        testimonial.caption,
        "Proof the internet loves: Instant Funnel OS users = done-for-you funnel templates. Grab my preloaded template."
    );
    assert_eq!(
        plan.content_angles[1].hook,
        "\"This is how my faceless funnel runs while I sleep.\""
    );
}

#[test]
fn test_caption_block() {
    let plan = pinned_generator().generate(&FormInput::sample());
    let lines: Vec<&str> = plan.caption.split('\n').collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[0],
        "Instant Funnel OS + faceless system = done-for-you funnel templates."
    );
    assert_eq!(lines[3], "Step 3️⃣ Drop the CTA with mybio.io/funnel-os.");
    assert_eq!(lines[4], "");
}

#[test]
fn test_form_independent_sections() {
    let plan = pinned_generator().generate(&bare_form());

    let days: Vec<&str> = plan.schedule.iter().map(|s| s.day.as_str()).collect();
    assert_eq!(days, vec!["Day 1", "Day 3", "Day 5"]);
    assert_eq!(plan.automation_stack[0], "Clip Vault dashboard screen recording");
    assert_eq!(
        plan.thumbnail_prompts[2],
        "Minimalist layout: timer icon + \"Stock clip library for creators\" headline + arrow to CTA."
    );
}

#[test]
fn test_unknown_length_uses_thirty_second_preset() {
    let mut form = FormInput::sample();
    form.desired_length = "90".to_string();
    let plan = pinned_generator().generate(&form);

    assert_eq!(plan.total_duration(), 30);
    assert!(plan.quick_summary.contains("problem > solution > CTA arc"));
}

#[test]
fn test_generate_checked_rejects_blank_product_name() {
    let mut form = FormInput::sample();
    form.product_name = String::new();

    let err = pinned_generator().generate_checked(&form).unwrap_err();
    assert!(err.to_string().contains("productName"));
}

#[test]
fn test_seeded_generators_agree() {
    let form = FormInput::sample();
    let a = PlanGeneratorBuilder::new().with_seed(Some(11)).build().generate(&form);
    let b = PlanGeneratorBuilder::new().with_seed(Some(11)).build().generate(&form);
    assert_eq!(a, b);
}

#[test]
fn test_source_overrides_seed() {
    let form = FormInput::sample();
    let pinned = pinned_generator().generate(&form);
    for seed in 0..8 {
        let plan = PlanGeneratorBuilder::new()
            .with_seed(Some(seed))
            .with_random_source(FirstChoice)
            .build()
            .generate(&form);
        assert_eq!(plan, pinned);
    }
}
