//! Parameter types for the exec tool

use mcp_common::{invalid_params, McpError};
use rmcp::model::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::types::ExecutionRequest;

/// Arguments of a `tools/call` for the exec tool
///
/// `input` is optional here so that a missing command becomes the
/// "command not specified" result instead of a protocol error.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExecParams {
    #[serde(default)]
    pub input: Option<String>,

    /// Seconds before the process is killed
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl ExecParams {
    pub fn from_arguments(arguments: JsonObject) -> Result<Self, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| invalid_params(format!("Invalid arguments: {}", e)))
    }

    pub fn into_request(self) -> Result<ExecutionRequest, McpError> {
        if self.timeout == Some(0) {
            return Err(invalid_params(
                "timeout must be a positive number of seconds",
            ));
        }

        Ok(ExecutionRequest {
            command: self.input.unwrap_or_default(),
            timeout_secs: self.timeout,
        })
    }
}

/// JSON schema advertised for the exec tool
pub fn input_schema(default_timeout_secs: u64) -> JsonObject {
    let schema = json!({
        "type": "object",
        "properties": {
            "input": {
                "type": "string",
                "description": "Command to execute in the process"
            },
            "timeout": {
                "type": "integer",
                "description": "Timeout before termination (seconds, optional)",
                "default": default_timeout_secs
            }
        },
        "required": ["input"]
    });

    match schema {
        serde_json::Value::Object(map) => map,
        _ => JsonObject::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_full_arguments() {
        let params = ExecParams::from_arguments(args(json!({"input": "ls", "timeout": 5}))).unwrap();
        let request = params.into_request().unwrap();
        assert_eq!(request, ExecutionRequest::new("ls").with_timeout(5));
    }

    #[test]
    fn test_missing_or_null_input_is_empty_command() {
        for value in [json!({}), json!({"input": null}), json!({"timeout": 3})] {
            let request = ExecParams::from_arguments(args(value))
                .unwrap()
                .into_request()
                .unwrap();
            assert!(request.command.is_empty());
        }
    }

    #[test]
    fn test_bad_timeouts_rejected() {
        assert!(ExecParams::from_arguments(args(json!({"input": "ls", "timeout": -1}))).is_err());
        assert!(ExecParams::from_arguments(args(json!({"input": "ls", "timeout": "5"}))).is_err());
        assert!(ExecParams::from_arguments(args(json!({"input": "ls", "timeout": 1.5}))).is_err());

        let zero = ExecParams::from_arguments(args(json!({"input": "ls", "timeout": 0}))).unwrap();
        let err = zero.into_request().unwrap_err();
        assert!(err.message.contains("positive"));
    }

    #[test]
    fn test_input_must_be_string() {
        let err = ExecParams::from_arguments(args(json!({"input": ["ls"]}))).unwrap_err();
        assert!(err.message.starts_with("Invalid arguments"));
    }

    #[test]
    fn test_schema_shape() {
        let schema = input_schema(42);
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["input"]));
        assert_eq!(schema["properties"]["input"]["type"], "string");
        assert_eq!(schema["properties"]["timeout"]["type"], "integer");
        assert_eq!(schema["properties"]["timeout"]["default"], 42);
    }
}
