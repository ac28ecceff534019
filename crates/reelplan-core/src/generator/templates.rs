//! Copy templates for every section of a generated plan.
//!
//! Each template family is a function over a [`TemplateContext`], the values
//! derived once from the form. Per-beat families match on [`BeatLabel`].
//! Random picks are not made here: the caller chooses from the option banks
//! exported by this module and passes the result in.

use crate::{
    models::{BeatLabel, ContentAngle, FormInput, LengthPreset, ScheduleSlot},
    text::{capitalize, compact_lowercase, humanize_seconds},
};

/// Proof beat subject when no benefits were supplied.
pub const DEFAULT_SECONDARY_BENEFIT: &str = "the core feature";

/// Lead-ins for the second hook.
pub const HOOK_LEAD_INS: [&str; 4] = ["POV", "If you're", "The exact way", "How I automate"];

/// Candidates for the third overlay phrase.
pub const FACELESS_OVERLAYS: [&str; 3] = [
    "No talking head needed",
    "Faceless creator friendly",
    "Set-and-forget flow",
];

/// Candidates for the soundtrack line of the upload checklist.
pub const MUSIC_GENRES: [&str; 3] = ["lofi beat", "future bass loop", "upbeat pop"];

/// Hashtags added to every plan.
pub const FIXED_HASHTAGS: [&str; 3] = [
    "#facelessmarketing",
    "#affiliateautomation",
    "#contentworkflow",
];

/// Values derived from a form that the templates substitute.
#[derive(Debug, Clone)]
pub struct TemplateContext<'a> {
    pub form: &'a FormInput,
    pub total_seconds: u32,
    pub benefits: Vec<String>,
    pub hero_benefit: String,
    pub secondary_benefit: String,
    pub core_pain: String,
}

impl<'a> TemplateContext<'a> {
    pub fn new(form: &'a FormInput, preset: &LengthPreset) -> Self {
        let benefits = form.benefit_list();
        let pains = form.pain_point_list();

        let hero_benefit = benefits
            .first()
            .cloned()
            .unwrap_or_else(|| capitalize(&form.product_description));
        let secondary_benefit = benefits
            .get(1)
            .or_else(|| benefits.first())
            .cloned()
            .unwrap_or_else(|| DEFAULT_SECONDARY_BENEFIT.to_string());
        let core_pain = pains
            .into_iter()
            .next()
            .unwrap_or_else(|| format!("struggling to keep up with {}", form.audience));

        Self {
            form,
            total_seconds: preset.seconds,
            benefits,
            hero_benefit,
            secondary_benefit,
            core_pain,
        }
    }

    fn product(&self) -> &str {
        &self.form.product_name
    }

    fn platform(&self) -> &'static str {
        self.form.platform.as_str()
    }
}

/// The four opening lines, in fixed order.
pub fn hooks(ctx: &TemplateContext<'_>, lead_in: &str) -> Vec<String> {
    let audience = if ctx.form.audience.is_empty() {
        "you"
    } else {
        ctx.form.audience.as_str()
    };
    let hero = ctx.hero_benefit.to_lowercase();
    let pain = capitalize(&ctx.core_pain);
    let teaser = humanize_seconds(f64::min(8.0, f64::from(ctx.total_seconds) / 2.0));

    vec![
        format!("What if {audience} could {hero} in {teaser}?"),
        format!("{lead_in}: {pain} ends with {}.", ctx.product()),
        format!("{} hack: {hero} without showing your face.", ctx.product()),
        format!(
            "Stop scrolling—{pain}? Use this {} ready plug.",
            ctx.platform().to_lowercase()
        ),
    ]
}

/// The six overlay phrases beats draw from. `faceless_phrase` fills slot 2.
pub fn overlay_phrases(ctx: &TemplateContext<'_>, faceless_phrase: &str) -> Vec<String> {
    vec![
        format!("Step-by-step {} ready", ctx.platform()),
        format!("{} in action", ctx.product()),
        faceless_phrase.to_string(),
        "Hook • Proof • CTA framework".to_string(),
        "Trust badges & social proof built-in".to_string(),
        format!(
            "Promote it in under {}",
            humanize_seconds(f64::from(ctx.total_seconds))
        ),
    ]
}

/// Narration for one beat. The hook beat reads `opening_hook` aloud.
pub fn voiceover(label: BeatLabel, ctx: &TemplateContext<'_>, opening_hook: &str) -> String {
    match label {
        BeatLabel::Hook => {
            format!("\"{opening_hook}\" with animated captions synced to each word.")
        }
        BeatLabel::Problem => format!(
            "Narrate a quick story: \"{}. I used to waste hours...\"",
            capitalize(&ctx.core_pain)
        ),
        BeatLabel::SolutionSetup => format!(
            "Introduce {} and highlight {}.",
            ctx.product(),
            ctx.hero_benefit
        ),
        BeatLabel::ProofDemo => format!(
            "Walk through {} using captions like \"Watch this...\"",
            ctx.secondary_benefit
        ),
        BeatLabel::Cta => {
            let payoff = if ctx.form.affiliate_link().is_some() {
                "exclusive access"
            } else {
                "the exact tool"
            };
            format!("Land the CTA: \"Hit the link for {payoff}\" and reiterate payoff.")
        }
    }
}

/// Three footage suggestions for one beat.
pub fn broll_ideas(label: BeatLabel, ctx: &TemplateContext<'_>) -> Vec<String> {
    match label {
        BeatLabel::Hook => vec![
            format!("Bold text overlay: \"{}\"", ctx.hero_benefit),
            "B-roll: quick scroll-stopping screen recording".to_string(),
            "Emoji pop: 🔥 + product box shot".to_string(),
        ],
        BeatLabel::Problem => vec![
            format!("Relatable screenshots of {}", ctx.core_pain),
            format!("Text prompt: \"Tired of {}?\"", ctx.core_pain),
            "Stock clip that visualizes frustration".to_string(),
        ],
        BeatLabel::SolutionSetup => vec![
            format!("Show {} interface or packaging", ctx.product()),
            "Overlay bullet of top benefit".to_string(),
            "Cursor or finger pointing to key feature".to_string(),
        ],
        BeatLabel::ProofDemo => vec![
            format!("Screen capture of feature solving \"{}\"", ctx.core_pain),
            "Side-by-side before/after".to_string(),
            "Metric or testimonial pop-in".to_string(),
        ],
        BeatLabel::Cta => vec![
            format!(
                "Big CTA card with \"{}\"",
                ctx.form.affiliate_link().unwrap_or("Grab it via my link")
            ),
            "Countdown sticker to trigger urgency".to_string(),
            "Animated arrow to profile/bio".to_string(),
        ],
    }
}

/// The three reusable angles. `first_hook` opens the "Pain > Relief" angle.
pub fn content_angles(ctx: &TemplateContext<'_>, first_hook: String) -> Vec<ContentAngle> {
    let product = ctx.product();
    let stacked = if ctx.benefits.is_empty() {
        ctx.hero_benefit.clone()
    } else {
        ctx.benefits
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" & ")
    };

    vec![
        ContentAngle {
            title: "Pain > Relief".to_string(),
            hook: first_hook,
            voiceover: format!(
                "Call out {}, then show {product} solving it step-by-step.",
                ctx.core_pain
            ),
            caption: format!(
                "Feeling {}? {product} fixes it in minutes. Link + bonus in bio.",
                ctx.core_pain
            ),
        },
        ContentAngle {
            title: "Behind-the-Automation".to_string(),
            hook: "\"This is how my faceless funnel runs while I sleep.\"".to_string(),
            voiceover: "Walk through the automation: trigger, product highlight, affiliate link redirection.".to_string(),
            caption: format!(
                "Faceless affiliate setup using {product}. Save & follow for the full workflow."
            ),
        },
        ContentAngle {
            title: "Testimonial Remix".to_string(),
            hook: format!("\"I tried {product} for 7 days — here are the receipts.\""),
            voiceover: format!("Break down metrics or quotes, then stack benefits {stacked}."),
            caption: format!(
                "Proof the internet loves: {product} users = {}. Grab my preloaded template.",
                ctx.hero_benefit.to_lowercase()
            ),
        },
    ]
}

/// The post caption, one line per step with a blank line before the sign-off.
pub fn caption(ctx: &TemplateContext<'_>) -> String {
    [
        format!(
            "{} + faceless system = {}.",
            ctx.product(),
            ctx.hero_benefit.to_lowercase()
        ),
        "Step 1️⃣ Hook them with a scroll-stopper.".to_string(),
        "Step 2️⃣ Show the workflow without ever filming your face.".to_string(),
        format!(
            "Step 3️⃣ Drop the CTA with {}.",
            ctx.form.affiliate_link().unwrap_or("your custom link")
        ),
        String::new(),
        "Save this breakdown + comment \"FACELess\" so I DM the automation stack.".to_string(),
    ]
    .join("\n")
}

/// Three fixed tags followed by the platform and product tags.
pub fn hashtags(ctx: &TemplateContext<'_>) -> Vec<String> {
    let mut tags: Vec<String> = FIXED_HASHTAGS.iter().map(|tag| tag.to_string()).collect();
    tags.push(format!("#{}tips", compact_lowercase(ctx.platform())));
    tags.push(format!("#{}", compact_lowercase(ctx.product())));
    tags
}

pub fn call_to_action(ctx: &TemplateContext<'_>) -> String {
    format!(
        "Drop \"{}\" in captions + pin comment directing viewers to your bio.",
        ctx.form.affiliate_link().unwrap_or("FACELINK")
    )
}

pub fn upload_checklist(music: &str) -> Vec<String> {
    vec![
        "Record voiceover in a quiet space or use generated AI voice;".to_string(),
        "Layer captions with high contrast fonts (Geist/Bold);".to_string(),
        "Stack 2-3 proof shots or metrics mid-video;".to_string(),
        "Punch in on CTA with animated arrow to link placeholder;".to_string(),
        format!("Add {music} track from royalty-free library;"),
        "Preview at 1.25x speed to ensure pacing hits the beat.".to_string(),
    ]
}

/// Posting cadence; independent of the form.
pub fn schedule() -> Vec<ScheduleSlot> {
    [
        (
            "Day 1",
            "Primary pain-point hook",
            "Capture attention + tag link in bio in comments",
        ),
        (
            "Day 3",
            "Automation walkthrough",
            "Educate + reposition as faceless friendly",
        ),
        (
            "Day 5",
            "Social proof remix",
            "Stack testimonials + hard CTA with urgency",
        ),
    ]
    .into_iter()
    .map(|(day, concept, objective)| ScheduleSlot {
        day: day.to_string(),
        concept: concept.to_string(),
        objective: objective.to_string(),
    })
    .collect()
}

pub fn automation_stack(ctx: &TemplateContext<'_>) -> Vec<String> {
    vec![
        format!("{} dashboard screen recording", ctx.product()),
        "CapCut template with auto captions & bold keywords".to_string(),
        "Metric overlays pulled from Google Sheets or Notion widget".to_string(),
    ]
}

pub fn thumbnail_prompts(ctx: &TemplateContext<'_>) -> Vec<String> {
    vec![
        format!(
            "Split screen: left \"Before\" dark, right \"After\" bright with {}.",
            ctx.product()
        ),
        "Bold text \"Faceless Funnel\" + product mockup on gradient background.".to_string(),
        format!(
            "Minimalist layout: timer icon + \"{}\" headline + arrow to CTA.",
            ctx.hero_benefit
        ),
    ]
}

pub fn quick_summary(ctx: &TemplateContext<'_>, preset: &LengthPreset) -> String {
    format!(
        "{} + {} {} — {}.",
        ctx.product(),
        ctx.platform(),
        preset.promise,
        ctx.form.tone.flavor()
    )
}
