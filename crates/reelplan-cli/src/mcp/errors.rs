//! Error handling utilities for MCP server

use reelplan_core::ReelplanError;
use rmcp::ErrorData;

/// Helper to convert generator errors to MCP errors
///
/// Bad caller input becomes `invalid_params`, anything else is reported as an
/// internal error.
pub fn to_mcp_error(message: &str, error: &ReelplanError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_invalid_input() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_invalid_input_maps_to_invalid_params() {
        let error = ReelplanError::invalid_input("audience").with_reason("must not be empty");
        let mcp = to_mcp_error("Failed to generate plan", &error);
        assert_eq!(mcp.code, ErrorCode::INVALID_PARAMS);
        assert!(mcp.message.contains("audience"));
        assert!(mcp.message.starts_with("Failed to generate plan: "));
    }

    #[test]
    fn test_file_errors_map_to_internal_error() {
        let error = ReelplanError::FileSystem {
            path: "/tmp/offer.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let mcp = to_mcp_error("Failed", &error);
        assert_eq!(mcp.code, ErrorCode::INTERNAL_ERROR);
    }
}
