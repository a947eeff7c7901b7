//! Launch context handed over by the external LTI launch provider

mod token;

pub use token::{AgsEndpoint, LaunchToken, PlatformContext, ResourceLink};
