//! Error types for session establishment and command execution.
//!
//! Two vocabularies live here: [`ConnectorError`] is the closed set of
//! failures a blocking connector reports in, and [`SessionError`] is what
//! the async facade surfaces to callers.

use thiserror::Error;
use tokio::task::JoinError;

/// Failures reported by the underlying blocking connector.
#[derive(Error, Debug)]
pub enum ConnectorError {
    /// Connection establishment did not complete within the connector's
    /// own timeout.
    ///
    /// The payload is the connector's detail text. It is discarded when
    /// the facade translates this condition at session open, so the
    /// caller-visible message stays stable.
    #[error("connect timed out: {0}")]
    ConnectTimeout(String),

    /// The device rejected the supplied credentials.
    #[error("authentication rejected: {0}")]
    AuthenticationFailed(String),

    /// Any other connector failure: transport drop, device error output,
    /// command timeout on an established session.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors surfaced by [`ConnectHandler`](crate::session::ConnectHandler)
/// and [`Session`](crate::session::Session).
#[derive(Error, Debug)]
pub enum SessionError {
    /// Connection establishment timed out.
    ///
    /// Only produced while opening a session; a timeout reported by an
    /// established session passes through as [`SessionError::Connector`].
    #[error("Connection timed out.")]
    Timeout,

    /// The device rejected the credentials while opening the session.
    ///
    /// Not retryable without corrected credentials.
    #[error("Authentication failed.")]
    Authentication,

    /// An unmapped connector failure, forwarded as-is.
    #[error(transparent)]
    Connector(#[from] ConnectorError),

    /// The offloaded blocking call panicked or was aborted before it
    /// completed.
    #[error("background connector call failed: {0}")]
    Background(#[from] JoinError),

    /// The session handle has been released, or was lost to a panicked
    /// background call.
    #[error("session is not connected")]
    NotConnected,
}
