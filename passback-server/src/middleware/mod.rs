//! Request middleware for the passback server

mod launch;
mod trace;

pub use launch::require_launch_token;
pub use trace::{REQUEST_ID_HEADER, trace_middleware};
