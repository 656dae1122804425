//! Action group dispatcher integration tests
//!
//! Runs full platform events (as JSON) through the dispatcher.

#[cfg(test)]
mod tests {
    use crate::common::{ActionResponseAssertions, EventFactory};
    use bedrock_agents::action_group::{ActionDispatcher, ActionGroupEvent, ActionGroupResponse};
    use chrono::DateTime;
    use serde_json::json;

    fn dispatch(event: &ActionGroupEvent) -> ActionGroupResponse {
        ActionDispatcher::new().dispatch(event)
    }

    #[test]
    fn test_count_words_scenario() {
        let response = dispatch(&EventFactory::process_text(
            "Hello world test message",
            "count_words",
        ));
        let body = response.assert_ok();

        assert_eq!(body["result"], "Word count: 4");
        assert_eq!(body["originalText"], "Hello world test message");
        assert_eq!(body["operation"], "count_words");
    }

    #[test]
    fn test_to_uppercase_scenario() {
        let body = dispatch(&EventFactory::process_text("hello world", "to_uppercase")).assert_ok();
        assert_eq!(body["result"], "HELLO WORLD");
    }

    #[test]
    fn test_current_time_scenario() {
        let body = dispatch(&EventFactory::current_time()).assert_ok();
        let time = body["currentTime"].as_str().unwrap();

        assert!(DateTime::parse_from_rfc3339(time).is_ok());
        assert!(time.ends_with('Z'));
    }

    #[test]
    fn test_unsupported_path_scenario() {
        let response = dispatch(&EventFactory::create("/unsupported-path", "GET"));
        response.assert_bad_request("Unsupported API path");
        assert_eq!(response.response.api_path, "/unsupported-path");
    }

    #[test]
    fn test_body_shapes_are_equivalent() {
        let flat = dispatch(&EventFactory::process_text("a b c", "count_words")).assert_ok();
        let properties =
            dispatch(&EventFactory::process_text_properties("a b c", "count_words")).assert_ok();
        let parameters =
            dispatch(&EventFactory::process_text_parameters("a b c", "count_words")).assert_ok();

        assert_eq!(flat, properties);
        assert_eq!(flat, parameters);
    }

    #[test]
    fn test_validation_errors() {
        dispatch(&EventFactory::create("/process-text", "GET"))
            .assert_bad_request("Unsupported method GET for /process-text");
        dispatch(&EventFactory::create("/get-current-time", "POST"))
            .assert_bad_request("Unsupported method POST for /get-current-time");
        dispatch(&EventFactory::create("/process-text", "POST"))
            .assert_bad_request("Missing required parameters: text and operation");
        dispatch(&EventFactory::process_text("hi", "reverse"))
            .assert_bad_request("Unsupported operation: reverse");
    }

    #[test]
    fn test_envelope_from_platform_json() {
        let event: ActionGroupEvent = serde_json::from_value(json!({
            "messageVersion": "1.0",
            "agent": {"name": "sample-agent", "id": "A1", "alias": "L1", "version": "DRAFT"},
            "inputText": "Count the words in: one two",
            "sessionId": "s-1",
            "actionGroup": "sample-actions",
            "apiPath": "/process-text",
            "httpMethod": "POST",
            "requestBody": {
                "content": {
                    "application/json": {
                        "properties": [
                            {"name": "text", "type": "string", "value": "one two"},
                            {"name": "operation", "type": "string", "value": "count_words"}
                        ]
                    }
                }
            },
            "sessionAttributes": {"user": "alice"},
            "promptSessionAttributes": {}
        }))
        .unwrap();

        let response = serde_json::to_value(dispatch(&event)).unwrap();

        assert_eq!(response["messageVersion"], "1.0");
        assert_eq!(response["response"]["actionGroup"], "sample-actions");
        assert_eq!(response["response"]["apiPath"], "/process-text");
        assert_eq!(response["response"]["httpMethod"], "POST");
        assert_eq!(response["response"]["httpStatusCode"], 200);
        assert_eq!(response["response"]["sessionAttributes"]["user"], "alice");
        assert!(response["response"].get("promptSessionAttributes").is_none());

        let body = response["response"]["responseBody"]["application/json"]["body"]
            .as_str()
            .unwrap();
        let body: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(body["result"], "Word count: 2");
    }

    #[test]
    fn test_every_operation_round_trips_through_dispatch() {
        let cases = [
            ("count_words", "  spaced   out  ", "Word count: 2"),
            ("count_characters", "héllo", "Character count: 5"),
            ("to_uppercase", "straße", "STRASSE"),
            ("to_lowercase", "ÀB", "àb"),
        ];

        for (operation, text, expected) in cases {
            let body = dispatch(&EventFactory::process_text(text, operation)).assert_ok();
            assert_eq!(body["result"], expected, "operation {}", operation);
        }
    }
}
