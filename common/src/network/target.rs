//! # Probe Target Model
//!
//! Defines the host/service pair a probe run operates on.
//!
//! A target is built once from the command-line arguments and never
//! mutated. The service stays a string on purpose: only numeric services
//! are accepted, and enforcement happens at resolution time so a bad value
//! surfaces as a resolution failure rather than an argument error.

use std::fmt;

/// The host/service pair to resolve and probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    /// Host name or address literal to resolve.
    pub host: String,
    /// Service as a decimal port string (e.g. `"80"`).
    pub port: String,
}

impl Target {
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
