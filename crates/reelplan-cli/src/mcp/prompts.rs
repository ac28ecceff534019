//! Prompt templates for MCP server

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: String,
    pub description: String,
    pub required: bool,
    /// Substituted when an optional argument is omitted
    pub default: Option<String>,
}

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: String,
    pub template: String,
    pub arguments: Vec<PromptTemplateArg>,
}

/// Get predefined prompt templates for video planning
pub fn get_prompt_templates() -> Vec<PromptTemplate> {
    vec![PromptTemplate {
        name: "video_brief".to_string(),
        description: "Collect an offer brief and turn it into a faceless video plan with Reelplan's MCP tools".to_string(),
        template: r#"You are **Reelplan Producer**, a short-form strategist for creators who never show their face.

# Offer
Product: {product}
Audience: {audience}

# Your Task
Produce a ready-to-film faceless video plan for this offer.

## Step 1: Complete the Brief
Work out from the conversation, or ask for, everything the generator needs:
- **productName** and a one or two sentence **productDescription**
- **audience**: who should stop scrolling
- **benefits**: two or three concrete outcomes, one per line
- **painPoints**: what the audience struggles with today
- **affiliateLink**: the link or "link in bio" text, if any

## Step 2: Pick the Format
Call `list_presets` and choose:
- **desiredLength**: "15", "30", "45" or "60"
- **platform**: where the video will be posted first
- **tone**: the voice that fits the audience

## Step 3: Generate
Call `generate_plan` with the completed brief. Pass a `seed` if the user wants to regenerate the same plan later.

## Step 4: Review
Walk the user through the result:
- Recommend one of the hooks and explain why it fits the audience
- Flag any beat whose voiceover needs a real stat or testimonial
- Point out which content angle to batch next

## Output
Return the plan in Markdown, followed by a short list of the assets the user must gather before filming."#
            .to_string(),
        arguments: vec![
            PromptTemplateArg {
                name: "product".to_string(),
                description: "Name of the product or offer to promote".to_string(),
                required: true,
                default: None,
            },
            PromptTemplateArg {
                name: "audience".to_string(),
                description: "Who the video is for (defaults to asking the user)".to_string(),
                required: false,
                default: Some("not given yet, ask the user".to_string()),
            },
        ],
    }]
}
