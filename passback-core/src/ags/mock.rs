//! Mock AGS client for testing
//!
//! MockAgsClient records every call and serves scripted responses, enabling
//! fast, deterministic testing of the grade submission flow without an LMS.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use super::client::{AgsClient, AgsError};
use super::types::{LineItem, LineItemQuery, Score};
use crate::launch::LaunchToken;

/// One recorded call against the mock client, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum AgsCall {
    /// `list_line_items` with the query's resource-link scoping flag
    ListLineItems { resource_link_id: bool },
    /// `create_line_item` with the draft the caller sent
    CreateLineItem { line_item: LineItem },
    /// `submit_score` with the target id and the full score payload
    SubmitScore { line_item_id: String, score: Score },
}

/// Mock implementation of [`AgsClient`] for testing.
///
/// Script behavior with the `with_*` / `fail_*` builders, run the code under
/// test, then inspect [`calls`](Self::calls).
#[derive(Default)]
pub struct MockAgsClient {
    /// Line items served by `list_line_items`
    line_items: Mutex<Vec<LineItem>>,
    /// Id assigned to line items created through the mock
    created_id: Mutex<Option<String>>,
    /// When set, `create_line_item` answers without assigning an id
    omit_created_id: Mutex<bool>,
    /// Response served by `submit_score`
    submit_response: Mutex<Option<serde_json::Value>>,
    /// Scripted `list_line_items` failure message
    list_error: Mutex<Option<String>>,
    /// Scripted `submit_score` failure message
    submit_error: Mutex<Option<String>>,
    /// Every call received, in order
    calls: Mutex<Vec<AgsCall>>,
}

impl MockAgsClient {
    /// Create a mock with no line items and default responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve the given line items from `list_line_items`
    pub fn with_line_items(self, line_items: Vec<LineItem>) -> Self {
        *self.line_items.lock().unwrap() = line_items;
        self
    }

    /// Assign the given id to line items created through the mock
    pub fn with_created_id(self, id: impl Into<String>) -> Self {
        *self.created_id.lock().unwrap() = Some(id.into());
        self
    }

    /// Answer `create_line_item` without assigning an id, as a misbehaving
    /// platform would
    pub fn omit_created_id(self) -> Self {
        *self.omit_created_id.lock().unwrap() = true;
        self
    }

    /// Serve the given payload from `submit_score`
    pub fn with_submit_response(self, response: serde_json::Value) -> Self {
        *self.submit_response.lock().unwrap() = Some(response);
        self
    }

    /// Make every `list_line_items` call fail with a platform error
    pub fn fail_list_with(self, message: impl Into<String>) -> Self {
        *self.list_error.lock().unwrap() = Some(message.into());
        self
    }

    /// Make every `submit_score` call fail with a platform error
    pub fn fail_submit_with(self, message: impl Into<String>) -> Self {
        *self.submit_error.lock().unwrap() = Some(message.into());
        self
    }

    /// All calls received so far, in order
    pub fn calls(&self) -> Vec<AgsCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The scores passed to `submit_score`, in order
    pub fn submitted_scores(&self) -> Vec<(String, Score)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                AgsCall::SubmitScore {
                    line_item_id,
                    score,
                } => Some((line_item_id, score)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: AgsCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl AgsClient for MockAgsClient {
    async fn list_line_items(
        &self,
        _token: &LaunchToken,
        query: &LineItemQuery,
    ) -> Result<Vec<LineItem>, AgsError> {
        self.record(AgsCall::ListLineItems {
            resource_link_id: query.resource_link_id,
        });
        if let Some(message) = self.list_error.lock().unwrap().clone() {
            return Err(AgsError::Platform(message));
        }
        Ok(self.line_items.lock().unwrap().clone())
    }

    async fn create_line_item(
        &self,
        _token: &LaunchToken,
        line_item: &LineItem,
    ) -> Result<LineItem, AgsError> {
        self.record(AgsCall::CreateLineItem {
            line_item: line_item.clone(),
        });
        if *self.omit_created_id.lock().unwrap() {
            return Ok(LineItem {
                id: None,
                ..line_item.clone()
            });
        }
        let id = self
            .created_id
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| "mock-line-item".to_string());
        Ok(LineItem {
            id: Some(id),
            ..line_item.clone()
        })
    }

    async fn submit_score(
        &self,
        _token: &LaunchToken,
        line_item_id: &str,
        score: &Score,
    ) -> Result<serde_json::Value, AgsError> {
        self.record(AgsCall::SubmitScore {
            line_item_id: line_item_id.to_string(),
            score: score.clone(),
        });
        if let Some(message) = self.submit_error.lock().unwrap().clone() {
            return Err(AgsError::Platform(message));
        }
        Ok(self
            .submit_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| json!({})))
    }
}
