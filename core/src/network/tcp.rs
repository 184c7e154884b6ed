use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{info, warn};

use ns_common::error::{CandidateError, ProbeError};

/// Creates the client stream socket for one candidate's address family.
///
/// Creation failure means descriptor exhaustion or an unsupported family,
/// so it aborts the whole run rather than skipping to the next candidate.
pub fn client_socket(family: Domain) -> Result<Socket, ProbeError> {
    Socket::new(family, Type::STREAM, Some(Protocol::TCP)).map_err(ProbeError::Socket)
}

/// Applies the send and receive timeouts to the socket.
///
/// A failure to set either option downgrades to a warning; the connect
/// attempt proceeds regardless.
pub fn set_timeouts(socket: &Socket, timeout: Duration) {
    if let Err(e) = socket.set_read_timeout(Some(timeout)) {
        warn!("Failed setting receive timeout socket option: {e}");
    }
    if let Err(e) = socket.set_write_timeout(Some(timeout)) {
        warn!("Failed setting send timeout socket option: {e}");
    }
}

/// Attempts the connection in two steps: a non-blocking connect, then a
/// bounded wait for writability with a readback of the pending socket
/// error.
///
/// Only the in-progress case enters the wait; any other immediate connect
/// error fails the candidate at once. The socket is consumed either way,
/// so a failed attempt is closed before the caller moves on.
pub async fn connect(
    socket: Socket,
    addr: SocketAddr,
    wait: Duration,
) -> Result<TcpStream, CandidateError> {
    socket.set_nonblocking(true).map_err(CandidateError::Connect)?;

    let pending = match socket.connect(&addr.into()) {
        Ok(()) => false,
        Err(e) if in_progress(&e) => true,
        Err(e) => return Err(CandidateError::Connect(e)),
    };

    let stream = TcpStream::from_std(socket.into()).map_err(CandidateError::Connect)?;

    if pending {
        info!(
            "Waiting ({} sec) for three-way handshake to complete ...",
            wait.as_secs()
        );
        match timeout(wait, stream.writable()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(CandidateError::Connect(e)),
            Err(_elapsed) => return Err(CandidateError::HandshakeTimeout),
        }
        if let Some(e) = stream.take_error().map_err(CandidateError::Connect)? {
            return Err(CandidateError::Connect(e));
        }
        info!("Connected.");
    }

    Ok(stream)
}

/// EINPROGRESS is documented for non-blocking sockets only, but blocking
/// sockets with a send timeout report it as well.
fn in_progress(err: &io::Error) -> bool {
    err.raw_os_error() == Some(libc::EINPROGRESS) || err.kind() == io::ErrorKind::WouldBlock
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
