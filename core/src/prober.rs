//! # Resolve-and-Probe Loop
//!
//! Drives a full run: resolve the target, then walk the candidates in
//! resolver order until one succeeds or the list is exhausted. Recoverable
//! per-candidate failures advance the loop; resolution and socket-creation
//! failures abort it.

use std::io;
use std::net::SocketAddr;

use tokio::net::TcpStream;
use tracing::{info, warn};

use ns_common::config::Config;
use ns_common::error::{CandidateError, ProbeError};
use ns_common::network::target::Target;

use crate::network::tcp;
use crate::resolver::{self, Resolver};

/// A successful run.
///
/// Dropping a `Connected` outcome closes the stream, so the caller decides
/// how long the connection stays open.
#[derive(Debug)]
pub enum Outcome {
    /// Resolve-only mode stopped at the first displayable candidate.
    Resolved { addr: SocketAddr, display: String },
    /// A candidate completed the handshake.
    Connected {
        addr: SocketAddr,
        display: String,
        stream: TcpStream,
    },
}

impl Outcome {
    /// Display form of the address the run matched.
    pub fn display(&self) -> &str {
        match self {
            Outcome::Resolved { display, .. } | Outcome::Connected { display, .. } => display,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        match self {
            Outcome::Resolved { addr, .. } | Outcome::Connected { addr, .. } => *addr,
        }
    }
}

/// Resolves the target and probes its candidates in order, stopping at the
/// first success.
pub async fn run(target: &Target, cfg: &Config) -> Result<Outcome, ProbeError> {
    let resolver = Resolver::new();
    let candidates = resolver.resolve(target)?;

    let total = candidates.len();
    let mut last_failure: Option<CandidateError> = None;

    for (idx, candidate) in candidates.into_iter().enumerate() {
        let socket = tcp::client_socket(candidate.family)?;
        let more_candidates = idx + 1 < total;

        let display = match resolver::reverse_lookup(&candidate.addr) {
            Ok(display) => display,
            Err(failure) => {
                last_failure = Some(failure);
                continue;
            }
        };

        info!("Found {} on address {}:{}", target.host, display, target.port);

        if !cfg.connect {
            return Ok(Outcome::Resolved {
                addr: candidate.addr,
                display,
            });
        }

        tcp::set_timeouts(&socket, cfg.timeout);
        match tcp::connect(socket, candidate.addr, cfg.timeout).await {
            Ok(stream) => {
                return Ok(Outcome::Connected {
                    addr: candidate.addr,
                    display,
                    stream,
                });
            }
            Err(failure) => {
                if more_candidates {
                    if matches!(failure, CandidateError::HandshakeTimeout) {
                        warn!("Failed connecting to {display}, retrying ...");
                    } else {
                        warn!("Failed connecting to {display}: {failure}");
                    }
                }
                last_failure = Some(failure);
            }
        }
    }

    let source = last_failure.map(CandidateError::into_io).unwrap_or_else(|| {
        io::Error::new(io::ErrorKind::AddrNotAvailable, "no candidate attempted")
    });

    Err(ProbeError::Exhausted {
        host: target.host.clone(),
        source,
    })
}
