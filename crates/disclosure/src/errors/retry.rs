/// Classification for retry policy.
///
/// Used by the DART provider to decide whether a failed request is worth
/// repeating.
///
/// | Class | Retry? | Backoff |
/// |-------|--------|---------|
/// | `Never` | No | - |
/// | `WithBackoff` | Yes, up to the configured attempts | Exponential from the base delay |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - unknown company, malformed payload, or terminal failure.
    /// The request is fundamentally invalid and retrying won't help.
    Never,

    /// Retry after waiting.
    ///
    /// Used for transient errors like rate limiting (429), timeouts, server
    /// side failures and connection problems.
    WithBackoff,
}
