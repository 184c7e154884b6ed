#![cfg(test)]
use ns_common::config::Config;
use ns_common::error::ProbeError;
use ns_common::network::target::Target;
use ns_core::prober::{self, Outcome};
use std::net::TcpListener;
use std::time::Duration;

/// This test drives the full resolve-and-connect path against a live
/// loopback listener, the same way the binary does when invoked with the
/// connect flag.
#[tokio::test]
async fn probe_connects_to_loopback_listener() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;

    let cfg = Config {
        connect: true,
        timeout: Duration::from_secs(2),
    };
    let target = Target::new("127.0.0.1", addr.port().to_string());

    let outcome = prober::run(&target, &cfg).await?;

    match outcome {
        Outcome::Connected { stream, display, .. } => {
            assert_eq!(display, "127.0.0.1");
            assert_eq!(stream.peer_addr()?, addr, "connected to the wrong address");
            let (_conn, peer) = listener.accept()?;
            assert_eq!(peer, stream.local_addr()?, "listener saw a different client");
        }
        other => panic!("Expected a connection, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn resolve_only_succeeds_without_a_listener() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    let cfg = Config {
        connect: false,
        timeout: Duration::from_secs(2),
    };
    let target = Target::new("127.0.0.1", addr.port().to_string());

    let outcome = prober::run(&target, &cfg).await?;

    assert!(
        matches!(outcome, Outcome::Resolved { .. }),
        "Resolve-only mode must not attempt a connection"
    );
    assert_eq!(outcome.display(), "127.0.0.1");
    Ok(())
}

#[tokio::test]
async fn probe_fails_when_nothing_listens() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let cfg = Config {
        connect: true,
        timeout: Duration::from_secs(2),
    };
    let target = Target::new("127.0.0.1", addr.port().to_string());

    let result = prober::run(&target, &cfg).await;

    match result {
        Err(ProbeError::Exhausted { host, .. }) => assert_eq!(host, "127.0.0.1"),
        other => panic!("Expected candidate exhaustion, got {:?}", other),
    }
}

#[tokio::test]
async fn unresolvable_host_names_the_host_in_the_error() {
    let cfg = Config {
        connect: false,
        timeout: Duration::from_secs(2),
    };
    let target = Target::new("host.invalid", "80");

    let result = prober::run(&target, &cfg).await;

    match result {
        Err(err @ ProbeError::Resolution { .. }) => {
            assert!(
                err.to_string().contains("host.invalid"),
                "Diagnostic should name the host: {}",
                err
            );
        }
        other => panic!("Expected a resolution failure, got {:?}", other),
    }
}
