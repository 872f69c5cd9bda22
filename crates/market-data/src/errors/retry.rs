/// Classification for retry policy.
///
/// Providers never retry on their own; callers use this to decide whether a
/// failed fetch is worth repeating later or should be reported as final.
///
/// | Class | Repeat later? |
/// |-------|---------------|
/// | `Never` | No |
/// | `WithBackoff` | Yes, after a pause |
/// | `Transient` | Yes |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// The request is fundamentally invalid and retrying won't help.
    Never,

    /// Rate limiting or timeout. Worth retrying once the upstream recovers.
    WithBackoff,

    /// The upstream misbehaved for this one request (5xx, unparsable body).
    Transient,
}
