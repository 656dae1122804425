//! OpenAPI document registered with the agent for this action group
//!
//! The agent reads the summaries and descriptions to decide when to call each
//! path, so they are part of the contract.

use serde_json::{Value, json};

use super::dispatcher::{GET_CURRENT_TIME_PATH, PROCESS_TEXT_PATH};
use super::operations::TextOperation;
use super::types::APPLICATION_JSON;

/// Action group name used by the sample deployment
pub const ACTION_GROUP_NAME: &str = "sample-actions";

/// Build the OpenAPI 3.0 schema of the action group
pub fn action_group_schema() -> Value {
    let operations: Vec<&str> = TextOperation::ALL.iter().map(|op| op.as_str()).collect();

    let mut paths = serde_json::Map::new();
    paths.insert(
        GET_CURRENT_TIME_PATH.to_string(),
        json!({
            "get": {
                "summary": "Get current time",
                "description": "Returns the current date and time",
                "operationId": "getCurrentTime",
                "responses": {
                    "200": {
                        "description": "Successful response",
                        "content": {
                            APPLICATION_JSON: {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "currentTime": {
                                            "type": "string",
                                            "description": "Current date and time in ISO format"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }),
    );
    paths.insert(
        PROCESS_TEXT_PATH.to_string(),
        json!({
            "post": {
                "summary": "Process text input",
                "description": "Processes and analyzes the provided text",
                "operationId": "processText",
                "requestBody": {
                    "content": {
                        APPLICATION_JSON: {
                            "schema": {
                                "type": "object",
                                "properties": {
                                    "text": {
                                        "type": "string",
                                        "description": "Text to be processed"
                                    },
                                    "operation": {
                                        "type": "string",
                                        "enum": operations,
                                        "description": "Operation to perform on the text"
                                    }
                                },
                                "required": ["text", "operation"]
                            }
                        }
                    }
                },
                "responses": {
                    "200": {
                        "description": "Successful response",
                        "content": {
                            APPLICATION_JSON: {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "result": {
                                            "type": "string",
                                            "description": "Result of the text processing operation"
                                        },
                                        "originalText": {
                                            "type": "string",
                                            "description": "Original input text"
                                        },
                                        "operation": {
                                            "type": "string",
                                            "description": "Operation that was performed"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }),
    );

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Sample Actions API",
            "version": "1.0.0",
            "description": "API for sample agent actions"
        },
        "paths": paths
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_paths() {
        let schema = action_group_schema();
        assert_eq!(schema["openapi"], "3.0.0");
        assert!(schema["paths"][GET_CURRENT_TIME_PATH]["get"].is_object());
        assert!(schema["paths"][PROCESS_TEXT_PATH]["post"].is_object());
        assert!(schema["paths"][GET_CURRENT_TIME_PATH]["post"].is_null());
    }

    #[test]
    fn test_schema_operation_enum_matches_dispatcher() {
        let schema = action_group_schema();
        let enum_values = schema["paths"][PROCESS_TEXT_PATH]["post"]["requestBody"]["content"]
            [APPLICATION_JSON]["schema"]["properties"]["operation"]["enum"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().parse::<TextOperation>().unwrap())
            .collect::<Vec<_>>();

        assert_eq!(enum_values, TextOperation::ALL.to_vec());
    }
}
