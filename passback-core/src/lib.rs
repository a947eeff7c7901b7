//! passback-core: Core library for the passback LTI grade submission tool
//!
//! This crate provides the tool-side half of an LTI Assignment and Grade
//! Services (AGS) integration:
//!
//! - **Launch context** - [`LaunchToken`] and friends, the validated
//!   per-request context the external launch provider hands over
//! - **AGS wire types** - [`Score`] and [`LineItem`] payloads, plus the
//!   [`AgsClient`] seam to the platform integration client
//! - **Grade submission** - [`GradeService`] orchestrating line-item
//!   resolution and score submission for one grading request
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use passback_core::{GradeConfig, GradeRequest, GradeService, GradeValue, LaunchToken, MockAgsClient, TraceContext};
//!
//! async fn example(token: LaunchToken) -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(MockAgsClient::new());
//!     let grades = GradeService::new(client, GradeConfig::default());
//!
//!     let request = GradeRequest {
//!         grade: GradeValue::Text("8".to_string()),
//!         comment: Some("well done".to_string()),
//!     };
//!     let response = grades.submit(&TraceContext::new(), &token, &request).await?;
//!     println!("platform replied: {response}");
//!     Ok(())
//! }
//! ```

pub mod ags;
pub mod config;
pub mod error;
pub mod grade;
pub mod launch;
pub mod trace;

// Re-export key types for convenience
pub use ags::{
    ActivityProgress, AgsCall, AgsClient, AgsError, GradingProgress, LineItem, LineItemQuery,
    MockAgsClient, Score,
};
pub use config::GradeConfig;
pub use error::GradeError;
pub use grade::{GradeRequest, GradeService, GradeValue, parse_grade, resolve_line_item};
pub use launch::{AgsEndpoint, LaunchToken, PlatformContext, ResourceLink};
pub use trace::{RequestId, TraceContext};
