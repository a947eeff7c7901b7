//! Line-item resolution
//!
//! Decides which gradebook column a score goes to: the column bound by the
//! launch when there is one, otherwise an existing column for the resource
//! link, otherwise a lazily created one. Reuse is preferred over creation so
//! repeated submissions do not pile up duplicate columns.

use crate::ags::{AgsClient, AgsError, LineItem, LineItemQuery};
use crate::config::GradeConfig;
use crate::error::GradeError;
use crate::launch::LaunchToken;
use crate::trace::TraceContext;

/// Resolve the line-item id a score should be submitted against.
///
/// Creation only happens when the platform lists no line item for the
/// resource link. Two concurrent first submissions for the same resource link
/// can both observe an empty list and both create a column; no mutual
/// exclusion is provided here.
pub async fn resolve_line_item(
    client: &dyn AgsClient,
    ctx: &TraceContext,
    token: &LaunchToken,
    config: &GradeConfig,
) -> Result<String, GradeError> {
    let context = token
        .platform_context
        .as_ref()
        .ok_or(GradeError::MissingContext)?;
    let endpoint = context.endpoint.as_ref().ok_or(GradeError::MissingContext)?;

    // Fast path: the launch already binds a single gradebook column.
    if let Some(line_item_id) = &endpoint.lineitem {
        tracing::debug!(
            request_id = %ctx.request_id,
            line_item_id = %line_item_id,
            "using line item bound by the launch"
        );
        return Ok(line_item_id.clone());
    }

    let query = LineItemQuery {
        resource_link_id: true,
    };
    let line_items = client.list_line_items(token, &query).await?;

    if let Some(first) = line_items.first() {
        // Platform order decides; no disambiguation by label or tag.
        let id = first.id.clone().ok_or_else(|| {
            AgsError::MalformedResponse("listed line item has no id".to_string())
        })?;
        tracing::debug!(
            request_id = %ctx.request_id,
            line_item_id = %id,
            candidates = line_items.len(),
            "reusing existing line item"
        );
        return Ok(id);
    }

    let resource = context.resource.as_ref().ok_or(GradeError::MissingResource)?;
    let draft = LineItem {
        id: None,
        label: config.label.clone(),
        tag: config.tag.clone(),
        resource_link_id: resource.id.clone(),
        score_maximum: config.score_maximum,
    };
    tracing::info!(
        request_id = %ctx.request_id,
        resource_link_id = %resource.id,
        "creating line item"
    );
    let created = client.create_line_item(token, &draft).await?;
    created.id.ok_or_else(|| {
        AgsError::MalformedResponse("created line item has no id".to_string()).into()
    })
}
