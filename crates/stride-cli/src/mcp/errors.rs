//! Error mapping for the MCP server

use rmcp::ErrorData;
use stride_core::StrideError;

/// Converts a core error into an MCP error. Bad arguments become
/// `invalid_params` so the client can correct them; everything else is an
/// internal error.
pub fn to_mcp_error(message: &str, error: &StrideError) -> ErrorData {
    match error {
        StrideError::InvalidInput { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_invalid_input_maps_to_invalid_params() {
        let error = StrideError::invalid_input("race_date").with_reason("not a date");
        let mcp = to_mcp_error("Failed to set race date", &error);
        assert_eq!(mcp.code, ErrorCode::INVALID_PARAMS);
        assert!(mcp.message.starts_with("Failed to set race date: "));
    }

    #[test]
    fn test_other_errors_map_to_internal_error() {
        let error = StrideError::PlanNotFound {
            id: "missing".to_string(),
        };
        let mcp = to_mcp_error("Failed to load plan", &error);
        assert_eq!(mcp.code, ErrorCode::INTERNAL_ERROR);
    }
}
