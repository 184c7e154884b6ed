//! # Name Resolution
//!
//! Maps a host/service pair to the ordered candidate addresses the system
//! resolver returns, and a candidate's binary address back to a display
//! string. The session is rebuilt for every run; no lookup state is
//! shared between invocations.

use std::io;
use std::net::SocketAddr;

use dns_lookup::{AddrInfoHints, SockType, getaddrinfo, getnameinfo};
use socket2::Domain;

use ns_common::error::{CandidateError, ProbeError};
use ns_common::network::target::Target;

/// One resolved address entry to attempt.
#[derive(Clone, Debug)]
pub struct Candidate {
    /// Address family the client socket must be created with.
    pub family: Domain,
    /// The socket address as returned by the resolver.
    pub addr: SocketAddr,
}

/// A single-run resolver session.
pub struct Resolver {
    hints: AddrInfoHints,
}

impl Resolver {
    /// Builds a fresh session. Lookups allow both IPv4 and IPv6, request
    /// stream sockets only, and refuse service-name lookups.
    pub fn new() -> Self {
        Self {
            hints: AddrInfoHints {
                socktype: SockType::Stream.into(),
                flags: libc::AI_NUMERICSERV,
                ..AddrInfoHints::default()
            },
        }
    }

    /// Queries the system resolver for all addresses matching the target.
    ///
    /// Candidates keep the resolver-returned order, and the caller always
    /// gets at least one back: an empty answer is an error.
    pub fn resolve(&self, target: &Target) -> Result<Vec<Candidate>, ProbeError> {
        let entries = getaddrinfo(Some(&target.host), Some(&target.port), Some(self.hints))
            .map_err(|e| resolution_failed(target, io::Error::from(e).to_string()))?;

        let candidates: Vec<Candidate> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| Candidate {
                family: Domain::for_address(entry.sockaddr),
                addr: entry.sockaddr,
            })
            .collect();

        if candidates.is_empty() {
            return Err(resolution_failed(target, "no usable address returned".into()));
        }

        Ok(candidates)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

fn resolution_failed(target: &Target, reason: String) -> ProbeError {
    ProbeError::Resolution {
        host: target.host.clone(),
        reason,
    }
}

/// Maps a candidate's binary address back to its numeric display form.
pub fn reverse_lookup(addr: &SocketAddr) -> Result<String, CandidateError> {
    let (host, _service) = getnameinfo(addr, libc::NI_NUMERICHOST)
        .map_err(|e| CandidateError::ReverseLookup(io::Error::from(e)))?;
    Ok(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_ipv4_literal_yields_that_address() {
        let target = Target::new("127.0.0.1", "80");
        let candidates = Resolver::new().resolve(&target).unwrap();

        assert!(!candidates.is_empty());
        assert_eq!(candidates[0].addr.ip().to_string(), "127.0.0.1");
        assert_eq!(candidates[0].addr.port(), 80);
        assert_eq!(candidates[0].family, Domain::IPV4);
    }

    #[test]
    fn resolve_localhost_applies_the_service_port() {
        let target = Target::new("localhost", "8080");
        let candidates = Resolver::new().resolve(&target).unwrap();
        assert!(candidates.iter().all(|c| c.addr.port() == 8080));
    }

    #[test]
    fn resolve_rejects_service_names() {
        let target = Target::new("127.0.0.1", "http");
        let result = Resolver::new().resolve(&target);
        assert!(matches!(result, Err(ProbeError::Resolution { .. })));
    }

    #[test]
    fn resolve_fails_for_an_unresolvable_host() {
        // "invalid" is reserved (RFC 6761); resolvers must return no data.
        let target = Target::new("host.invalid", "80");
        let result = Resolver::new().resolve(&target);
        assert!(matches!(result, Err(ProbeError::Resolution { .. })));
    }

    #[test]
    fn reverse_lookup_yields_the_numeric_form() {
        let addr: SocketAddr = "127.0.0.1:80".parse().unwrap();
        assert_eq!(reverse_lookup(&addr).unwrap(), "127.0.0.1");
    }

    #[test]
    fn reverse_lookup_handles_ipv6() {
        let addr: SocketAddr = "[::1]:80".parse().unwrap();
        assert_eq!(reverse_lookup(&addr).unwrap(), "::1");
    }
}
