//! Validated launch token types
//!
//! The launch provider validates the inbound LTI launch (OIDC/JWT handling is
//! its concern, not ours) and attaches one [`LaunchToken`] to the request.
//! The token is immutable for the request's lifetime and never persisted.

use serde::{Deserialize, Serialize};

/// The validated per-request identity and platform context produced by the
/// launch flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchToken {
    /// Identifier of the learner the launch was issued for
    pub user_id: String,
    /// Platform context for the launching LMS; absent when the platform sent
    /// a launch without AGS claims
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_context: Option<PlatformContext>,
}

impl LaunchToken {
    /// Create a token with no platform context (useful in tests)
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            platform_context: None,
        }
    }
}

/// LMS-side context carried in the launch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformContext {
    /// AGS endpoint claim; required for any grade passback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<AgsEndpoint>,
    /// The resource link (assignment placement) that launched the tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<ResourceLink>,
}

/// The AGS endpoint claim of a launch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgsEndpoint {
    /// URL of the single line item this launch is bound to, when the platform
    /// scoped the launch to one gradebook column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineitem: Option<String>,
    /// URL of the platform's line-item collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineitems: Option<String>,
    /// AGS scopes granted to the tool
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scope: Vec<String>,
}

/// The LMS placement (e.g. an assignment) that launched the tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLink {
    /// Platform-assigned resource link identifier
    pub id: String,
    /// Human-readable title, when the platform sends one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_token() {
        let json = r#"{
            "userId": "learner-1",
            "platformContext": {
                "endpoint": { "lineitem": "https://lms.example/li/7", "scope": ["score"] },
                "resource": { "id": "rl-1", "title": "Quiz 1" }
            }
        }"#;

        let token: LaunchToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.user_id, "learner-1");
        let context = token.platform_context.unwrap();
        assert_eq!(
            context.endpoint.unwrap().lineitem.as_deref(),
            Some("https://lms.example/li/7")
        );
        assert_eq!(context.resource.unwrap().id, "rl-1");
    }

    #[test]
    fn missing_platform_context_deserializes_to_none() {
        let token: LaunchToken = serde_json::from_str(r#"{"userId":"learner-2"}"#).unwrap();
        assert!(token.platform_context.is_none());
    }

    #[test]
    fn endpoint_fields_default_when_absent() {
        let endpoint: AgsEndpoint = serde_json::from_str("{}").unwrap();
        assert!(endpoint.lineitem.is_none());
        assert!(endpoint.lineitems.is_none());
        assert!(endpoint.scope.is_empty());
    }
}
