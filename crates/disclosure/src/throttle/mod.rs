//! Request throttling for the disclosure service.
//!
//! DART enforces a daily quota and rejects bursts, so every outbound request
//! first takes a token from a [`Throttle`]. The policy is configurable
//! instead of a fixed sleep between requests.

mod token_bucket;

pub use token_bucket::{Throttle, ThrottlePolicy};
