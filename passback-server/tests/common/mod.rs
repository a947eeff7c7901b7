//! Shared test utilities for passback-server integration tests

use std::sync::Arc;

use axum::Extension;
use axum_test::TestServer;
use passback_core::{
    AgsEndpoint, GradeConfig, LaunchToken, MockAgsClient, PlatformContext, ResourceLink,
};
use passback_server::{AppState, create_router};

/// Test server over the real router, with the launch token pre-attached the
/// way the external launch provider would attach it.
#[allow(dead_code)]
pub fn server_with_token(client: Arc<MockAgsClient>, token: LaunchToken) -> TestServer {
    let state = Arc::new(AppState::new(client, GradeConfig::default()));
    let router = create_router(state).layer(Extension(token));
    TestServer::new(router).unwrap()
}

/// Test server with no launch token attached
#[allow(dead_code)]
pub fn server_without_token(client: Arc<MockAgsClient>) -> TestServer {
    let state = Arc::new(AppState::new(client, GradeConfig::default()));
    TestServer::new(create_router(state)).unwrap()
}

/// Token whose launch binds a single line item
#[allow(dead_code)]
pub fn token_with_lineitem(line_item_id: &str) -> LaunchToken {
    LaunchToken {
        user_id: "learner-1".to_string(),
        platform_context: Some(PlatformContext {
            endpoint: Some(AgsEndpoint {
                lineitem: Some(line_item_id.to_string()),
                ..AgsEndpoint::default()
            }),
            resource: None,
        }),
    }
}

/// Token with an AGS endpoint but no bound line item
#[allow(dead_code)]
pub fn token_with_resource(resource_id: &str) -> LaunchToken {
    LaunchToken {
        user_id: "learner-1".to_string(),
        platform_context: Some(PlatformContext {
            endpoint: Some(AgsEndpoint::default()),
            resource: Some(ResourceLink {
                id: resource_id.to_string(),
                title: None,
            }),
        }),
    }
}

/// Token whose platform context carries no AGS endpoint
#[allow(dead_code)]
pub fn token_without_endpoint() -> LaunchToken {
    LaunchToken {
        user_id: "learner-1".to_string(),
        platform_context: Some(PlatformContext::default()),
    }
}
