use reelplan_core::{FormInput, Platform, Tone};

/// Helper function to create a form for the given length, platform and tone
pub fn create_test_form(length: &str, platform: Platform, tone: Tone) -> FormInput {
    FormInput {
        product_name: "Instant Funnel OS".to_string(),
        product_description: "automation dashboard for affiliate marketers".to_string(),
        audience: "busy side hustlers".to_string(),
        benefits: "Done-for-you funnel templates\nDaily content scripts".to_string(),
        pain_points: "No time to film, Scared of showing face".to_string(),
        affiliate_link: String::new(),
        desired_length: length.to_string(),
        platform,
        tone,
    }
}
