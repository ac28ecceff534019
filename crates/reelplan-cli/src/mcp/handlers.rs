//! MCP tool handlers implementation

use log::debug;
use reelplan_core::{
    display::{Catalog, PlanReport},
    params as core,
};
use rmcp::{
    handler::server::tool::Parameters,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, JsonObject,
        ListPromptsResult, PaginatedRequestParam, Prompt, PromptArgument, PromptMessage,
        PromptMessageContent, PromptMessageRole,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::{
    errors::to_mcp_error,
    prompts::{get_prompt_templates, PromptTemplate},
};

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// The wrapper adds the MCP-facing derives to a core parameter type while the
// core type stays free of protocol concerns. #[serde(transparent)] passes
// deserialization straight through to the wrapped type.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type GeneratePlan = McpParams<core::GeneratePlan>;

pub type McpResult = Result<CallToolResult, McpError>;

/// A generated plan in both of the formats returned to the client.
#[derive(Debug)]
pub struct RenderedPlan {
    pub markdown: String,
    pub json: String,
}

/// Validate the form, generate a plan and render it.
pub fn render_plan(params: &core::GeneratePlan) -> Result<RenderedPlan, McpError> {
    let plan = params
        .generator()
        .generate_checked(&params.form)
        .map_err(|e| to_mcp_error("Failed to generate plan", &e))?;

    let json = serde_json::to_string_pretty(&plan)
        .map_err(|e| McpError::internal_error(format!("Failed to serialize plan: {e}"), None))?;
    let markdown = PlanReport::new(&params.form, &plan).to_string();

    Ok(RenderedPlan { markdown, json })
}

/// Substitute prompt arguments into the template text.
///
/// Optional arguments that were not supplied fall back to their default.
pub fn render_prompt(
    template: &PromptTemplate,
    arguments: Option<&JsonObject>,
) -> Result<String, McpError> {
    let mut prompt_text = template.template.clone();

    for arg_def in &template.arguments {
        let value = match arguments.and_then(|args| args.get(&arg_def.name)) {
            Some(value) => match value.as_str() {
                Some(text) => Some(text.to_string()),
                None => {
                    return Err(McpError::invalid_params(
                        format!("Argument '{}' must be a string", arg_def.name),
                        None,
                    ))
                }
            },
            None if arg_def.required => {
                return Err(McpError::invalid_params(
                    format!("Required argument '{}' is missing", arg_def.name),
                    None,
                ))
            }
            None => arg_def.default.clone(),
        };

        let placeholder = format!("{{{}}}", arg_def.name);
        prompt_text = prompt_text.replace(&placeholder, value.as_deref().unwrap_or_default());
    }

    Ok(prompt_text)
}

/// Handler implementations for the MCP server
pub struct McpHandlers;

impl McpHandlers {
    pub async fn generate_plan(&self, Parameters(params): Parameters<GeneratePlan>) -> McpResult {
        debug!("generate_plan: {:?}", params);

        let rendered = render_plan(params.as_ref())?;
        Ok(CallToolResult::success(vec![
            Content::text(rendered.markdown),
            Content::text(rendered.json),
        ]))
    }

    pub async fn list_presets(&self) -> McpResult {
        debug!("list_presets");

        Ok(CallToolResult::success(vec![Content::text(
            Catalog.to_string(),
        )]))
    }

    /// List all available prompts
    pub async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        debug!("list_prompts");

        let prompts = get_prompt_templates()
            .iter()
            .map(|template| {
                Prompt::new(
                    &template.name,
                    Some(&template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.clone(),
                                description: Some(arg.description.clone()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        Ok(ListPromptsResult {
            next_cursor: None,
            prompts,
        })
    }

    /// Get a specific prompt by name and apply arguments
    pub async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let template = get_prompt_templates()
            .into_iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| McpError::invalid_params("Prompt not found", None))?;

        let prompt_text = render_prompt(&template, request.arguments.as_ref())?;

        Ok(GetPromptResult {
            description: Some(template.description),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(prompt_text),
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use reelplan_core::FormInput;
    use rmcp::model::ErrorCode;
    use serde_json::json;

    use super::*;

    fn seeded(form: FormInput) -> core::GeneratePlan {
        core::GeneratePlan {
            form,
            seed: Some(11),
        }
    }

    #[test]
    fn test_render_plan_returns_markdown_and_json() {
        let rendered = render_plan(&seeded(FormInput::sample())).unwrap();

        assert!(rendered.markdown.starts_with("# Faceless workflow ready"));
        assert!(rendered.markdown.contains("## Hooks"));

        let value: serde_json::Value = serde_json::from_str(&rendered.json).unwrap();
        assert_eq!(value["hooks"].as_array().unwrap().len(), 4);
        assert_eq!(value["scriptBeats"].as_array().unwrap().len(), 5);
        assert!(value["quickSummary"]
            .as_str()
            .unwrap()
            .contains("Instant Funnel OS"));
    }

    #[test]
    fn test_render_plan_is_reproducible_with_seed() {
        let a = render_plan(&seeded(FormInput::sample())).unwrap();
        let b = render_plan(&seeded(FormInput::sample())).unwrap();
        assert_eq!(a.json, b.json);
        assert_eq!(a.markdown, b.markdown);
    }

    #[test]
    fn test_render_plan_rejects_blank_fields() {
        let form = FormInput {
            audience: "   ".to_string(),
            ..FormInput::sample()
        };
        let err = render_plan(&seeded(form)).unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("audience"));
    }

    #[tokio::test]
    async fn test_generate_plan_tool_returns_two_contents() {
        let params = Parameters(McpParams(seeded(FormInput::sample())));
        let result = McpHandlers.generate_plan(params).await.unwrap();

        assert_eq!(result.content.len(), 2);
    }

    #[tokio::test]
    async fn test_generate_plan_tool_rejects_invalid_form() {
        let form = FormInput {
            product_name: String::new(),
            ..FormInput::sample()
        };
        let err = McpHandlers
            .generate_plan(Parameters(McpParams(seeded(form))))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("productName"));
    }

    #[tokio::test]
    async fn test_list_presets_tool() {
        let result = McpHandlers.list_presets().await.unwrap();
        assert_eq!(result.content.len(), 1);
    }

    #[test]
    fn test_params_deserialize_from_flat_object() {
        let params: GeneratePlan = serde_json::from_value(json!({
            "productName": "Clip Vault",
            "productDescription": "stock clips",
            "audience": "creators",
            "platform": "YouTube Shorts",
            "seed": 9
        }))
        .unwrap();
        assert_eq!(params.as_ref().form.product_name, "Clip Vault");
        assert_eq!(params.as_ref().seed, Some(9));
    }

    #[test]
    fn test_params_reject_unknown_tone() {
        let result: Result<GeneratePlan, _> = serde_json::from_value(json!({
            "productName": "A",
            "productDescription": "b",
            "audience": "c",
            "tone": "Spooky"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_render_prompt_substitutes_arguments() {
        let template = &get_prompt_templates()[0];
        let args = json!({"product": "Clip Vault", "audience": "faceless creators"});
        let text = render_prompt(template, args.as_object()).unwrap();
        assert!(text.contains("Product: Clip Vault"));
        assert!(text.contains("Audience: faceless creators"));
        assert!(!text.contains("{product}"));
    }

    #[test]
    fn test_render_prompt_uses_default_for_optional_argument() {
        let template = &get_prompt_templates()[0];
        let args = json!({"product": "Clip Vault"});
        let text = render_prompt(template, args.as_object()).unwrap();
        assert!(text.contains("Audience: not given yet, ask the user"));
    }

    #[test]
    fn test_render_prompt_requires_product() {
        let template = &get_prompt_templates()[0];
        let err = render_prompt(template, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("product"));
    }

    #[test]
    fn test_render_prompt_rejects_non_string_argument() {
        let template = &get_prompt_templates()[0];
        let args = json!({"product": 42});
        assert!(render_prompt(template, args.as_object()).is_err());
    }
}
