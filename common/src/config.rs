use std::time::Duration;

/// Bound applied to every connect attempt, and to the socket send and
/// receive timeouts set before it.
pub const SOCKET_TIMEOUT: Duration = Duration::from_millis(10_000);

pub struct Config {
    /// Attempt a TCP connection to each resolved address.
    ///
    /// When unset the run stops at the first address that could be
    /// displayed.
    pub connect: bool,
    /// Per-attempt handshake wait, also used for SO_RCVTIMEO/SO_SNDTIMEO.
    pub timeout: Duration,
}
