//! Signed request dispatch.
//!
//! [`AwsRequest`] is what an operation serializes into, [`AwsHttpClient`]
//! signs and sends it, and [`AwsResponse`] is what comes back.

mod client;
mod request;
mod response;

pub use client::{AwsHttpClient, SigningScope, DEFAULT_USER_AGENT};
pub use request::AwsRequest;
pub use response::AwsResponse;
