//! Grade submission service

use std::sync::Arc;

use chrono::Utc;

use crate::ags::{ActivityProgress, AgsClient, GradingProgress, Score};
use crate::config::GradeConfig;
use crate::error::GradeError;
use crate::launch::LaunchToken;
use crate::trace::TraceContext;

use super::parse::parse_grade;
use super::request::GradeRequest;
use super::resolve::resolve_line_item;

/// Orchestrates line-item resolution and score submission for one grading
/// request.
///
/// Holds no per-request state; one instance is shared across requests.
#[derive(Clone)]
pub struct GradeService {
    client: Arc<dyn AgsClient>,
    config: GradeConfig,
}

impl GradeService {
    /// Create a service over the given platform client
    pub fn new(client: Arc<dyn AgsClient>, config: GradeConfig) -> Self {
        Self { client, config }
    }

    /// The configuration this service submits with
    pub fn config(&self) -> &GradeConfig {
        &self.config
    }

    /// Submit one grade for the launch behind `token`.
    ///
    /// May create a line item as a side effect; on success exactly one score
    /// has been submitted and the platform's response is returned verbatim.
    /// Steps run strictly sequentially and nothing is retried.
    pub async fn submit(
        &self,
        ctx: &TraceContext,
        token: &LaunchToken,
        request: &GradeRequest,
    ) -> Result<serde_json::Value, GradeError> {
        if token
            .platform_context
            .as_ref()
            .and_then(|context| context.endpoint.as_ref())
            .is_none()
        {
            return Err(GradeError::MissingContext);
        }

        let score_given = parse_grade(&request.grade)?;

        let line_item_id =
            resolve_line_item(self.client.as_ref(), ctx, token, &self.config).await?;

        let score = Score {
            user_id: token.user_id.clone(),
            score_given,
            score_maximum: self.config.score_maximum,
            activity_progress: ActivityProgress::Completed,
            grading_progress: GradingProgress::FullyGraded,
            comment: request.comment.clone(),
            timestamp: Utc::now(),
        };

        tracing::info!(
            request_id = %ctx.request_id,
            user_id = %score.user_id,
            line_item_id = %line_item_id,
            score_given,
            "submitting score"
        );

        Ok(self.client.submit_score(token, &line_item_id, &score).await?)
    }
}
