use std::io;

use thiserror::Error;

/// Failures that abort a probe run.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The name service returned no usable address for the host.
    #[error("failed resolving hostname {host}: {reason}")]
    Resolution { host: String, reason: String },

    /// Creating the local client socket failed. This is systemic rather
    /// than per-address, so the run aborts instead of moving to the next
    /// candidate.
    #[error("error creating client socket")]
    Socket(#[source] io::Error),

    /// Every resolved candidate was attempted without success.
    #[error("failed connecting to {host}")]
    Exhausted {
        host: String,
        #[source]
        source: io::Error,
    },
}

/// Failures scoped to a single candidate address. These advance the
/// iteration to the next candidate instead of aborting the run.
#[derive(Debug, Error)]
pub enum CandidateError {
    /// The candidate's address could not be mapped back to a display
    /// string.
    #[error("reverse lookup failed: {0}")]
    ReverseLookup(io::Error),

    /// The connect attempt failed outright.
    #[error(transparent)]
    Connect(io::Error),

    /// The handshake did not complete within the configured wait.
    #[error("connection attempt timed out")]
    HandshakeTimeout,
}

impl CandidateError {
    /// Collapses the failure into the error reported once the candidate
    /// list is exhausted.
    pub fn into_io(self) -> io::Error {
        match self {
            CandidateError::ReverseLookup(e) | CandidateError::Connect(e) => e,
            CandidateError::HandshakeTimeout => {
                io::Error::new(io::ErrorKind::TimedOut, "connection attempt timed out")
            }
        }
    }
}
