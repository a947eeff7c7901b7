//! Assignment and Grade Services (AGS) types and client seam

mod client;
mod mock;
mod types;

pub use client::{AgsClient, AgsError};
pub use mock::{AgsCall, MockAgsClient};
pub use types::{ActivityProgress, GradingProgress, LineItem, LineItemQuery, Score};
