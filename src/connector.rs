//! The seam between the async facade and the wrapped blocking library.
//!
//! The facade never speaks SSH itself. Prompt detection, paging
//! suppression, command-echo stripping and the transport all belong to
//! the wrapped automation library; these traits are the shape that
//! library (or a thin binding to it) presents. Every method here blocks,
//! and the facade only ever invokes them from a background worker thread.

use crate::error::ConnectorError;
use crate::host::HostConfig;

/// Factory for established device sessions.
///
/// [`Connector::connect`] receives the caller's [`HostConfig`] verbatim;
/// which keys it reads and how it validates them is the implementation's
/// business.
pub trait Connector: Send + Sync + 'static {
    /// The established-session type this factory produces.
    type Conn: Connection;

    /// Opens a session to the device described by `host`. Blocks until
    /// the session is usable or establishment fails.
    ///
    /// Report an establishment timeout as
    /// [`ConnectorError::ConnectTimeout`] and a credential rejection as
    /// [`ConnectorError::AuthenticationFailed`]; those two conditions,
    /// and only those two, are translated into the facade's
    /// fixed-message errors at session open.
    fn connect(&self, host: &HostConfig) -> Result<Self::Conn, ConnectorError>;
}

/// An established blocking session with a network device.
///
/// Handles shuttle between worker threads across calls, hence the
/// `Send + 'static` bound. The facade guarantees at most one call runs
/// at a time per handle.
pub trait Connection: Send + 'static {
    /// Sends one command and waits for the device prompt to return.
    fn send_command(&mut self, command: &str) -> Result<String, ConnectorError>;

    /// Enters configuration mode and applies `commands` in the given
    /// order, returning the combined output.
    fn send_config_set(&mut self, commands: &[String]) -> Result<String, ConnectorError>;

    /// Sends one command and waits on an elapsed-time heuristic instead
    /// of prompt detection. For interactions that never produce a
    /// recognizable prompt, such as paged or irregular output.
    fn send_command_timing(&mut self, command: &str) -> Result<String, ConnectorError>;

    /// Tears the session down. The facade calls this exactly once per
    /// established session, on every exit path of a scoped block.
    fn disconnect(&mut self) -> Result<(), ConnectorError>;
}
