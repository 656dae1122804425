//! Custom test assertions

use bedrock_agents::action_group::ActionGroupResponse;
use serde_json::Value;

/// Assertions for action group responses
pub trait ActionResponseAssertions {
    /// Assert status 200 and return the decoded body
    fn assert_ok(&self) -> Value;

    /// Assert status 400 with an error message containing `fragment`
    fn assert_bad_request(&self, fragment: &str);
}

impl ActionResponseAssertions for ActionGroupResponse {
    fn assert_ok(&self) -> Value {
        assert_eq!(self.status(), 200, "Expected 200, got {:?}", self);
        self.json_body().expect("Expected a JSON body")
    }

    fn assert_bad_request(&self, fragment: &str) {
        assert_eq!(self.status(), 400, "Expected 400, got {:?}", self);
        let body = self.json_body().expect("Expected a JSON body");
        let error = body["error"].as_str().expect("Expected an error message");
        assert!(
            error.contains(fragment),
            "Expected error containing {:?}, got {:?}",
            fragment,
            error
        );
    }
}
