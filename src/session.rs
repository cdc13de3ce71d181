//! Asynchronous scoped-session facade.
//!
//! [`ConnectHandler`] stores connection parameters and opens device
//! sessions by dispatching the connector's blocking calls onto tokio's
//! blocking-thread pool, so device I/O never stalls the event loop.
//! [`Session`] is the live handle whose lifetime spans one usage block.
//!
//! # Main Components
//!
//! - [`ConnectHandler`] - Stores configuration, opens scoped sessions
//! - [`Session`] - One established device session
//!
//! Sequential calls against one session complete in issuance order, and
//! the `&mut self` receivers rule out interleaved calls on a single
//! handle at compile time. Dropping an in-flight future does not stop
//! the blocking call already running on its worker thread; cancellation
//! must not be relied on to free the device end.

use log::{debug, trace};
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::connector::{Connection, Connector};
use crate::error::{ConnectorError, SessionError};
use crate::host::HostConfig;

/// Opens device sessions without blocking the event loop.
///
/// Construction stores the [`HostConfig`] unchanged and does not
/// connect. Each [`ConnectHandler::connect`] call hands the stored
/// parameters verbatim to the connector on a blocking worker.
pub struct ConnectHandler<C: Connector> {
    connector: Arc<C>,
    host: HostConfig,
    runtime: Handle,
}

impl<C: Connector> ConnectHandler<C> {
    /// Creates a handler bound to the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime. Use
    /// [`ConnectHandler::with_runtime`] to inject a handle explicitly.
    pub fn new(connector: C, host: HostConfig) -> Self {
        Self::with_runtime(connector, host, Handle::current())
    }

    /// Creates a handler that dispatches blocking work through an
    /// explicit runtime handle instead of the ambient one.
    pub fn with_runtime(connector: C, host: HostConfig, runtime: Handle) -> Self {
        Self {
            connector: Arc::new(connector),
            host,
            runtime,
        }
    }

    /// The stored connection parameters.
    pub fn host(&self) -> &HostConfig {
        &self.host
    }

    /// Opens a session, off-loop.
    ///
    /// A connector-reported establishment timeout becomes
    /// [`SessionError::Timeout`] and a credential rejection becomes
    /// [`SessionError::Authentication`]; every other connector failure
    /// passes through unmapped. On failure no handle is retained
    /// anywhere.
    pub async fn connect(&self) -> Result<Session<C>, SessionError> {
        let target = self.host.target();
        debug!("opening session to {target}");

        let connector = Arc::clone(&self.connector);
        let host = self.host.clone();
        let conn = self
            .runtime
            .spawn_blocking(move || connector.connect(&host))
            .await?
            .map_err(|err| match err {
                ConnectorError::ConnectTimeout(detail) => {
                    debug!("session to {target} timed out: {detail}");
                    SessionError::Timeout
                }
                ConnectorError::AuthenticationFailed(detail) => {
                    debug!("session to {target} rejected credentials: {detail}");
                    SessionError::Authentication
                }
                other => SessionError::Connector(other),
            })?;

        debug!("session to {target} established");
        Ok(Session {
            conn: Some(conn),
            target,
            runtime: self.runtime.clone(),
        })
    }

    /// Runs `body` inside a scoped session.
    ///
    /// Connects, hands the live session to `body`, then disconnects
    /// exactly once regardless of how `body` exited. An error from
    /// `body` is returned unchanged; a disconnect failure after a failed
    /// body is logged and dropped so it cannot mask the body's error,
    /// while a disconnect failure after a successful body is returned.
    pub async fn with_session<T, E, F>(&self, body: F) -> Result<T, E>
    where
        E: From<SessionError>,
        F: AsyncFnOnce(&mut Session<C>) -> Result<T, E>,
    {
        let mut session = self.connect().await.map_err(E::from)?;
        let outcome = body(&mut session).await;
        let released = session.close().await;

        match outcome {
            Ok(value) => {
                released.map_err(E::from)?;
                Ok(value)
            }
            Err(err) => {
                if let Err(release_err) = released {
                    debug!("disconnect after failed block also failed: {release_err}");
                }
                Err(err)
            }
        }
    }
}

/// One established device session.
///
/// Created by [`ConnectHandler::connect`] and consumed by
/// [`Session::close`], so a released handle cannot be reused. Each
/// operation moves the underlying handle onto a blocking worker for the
/// duration of one connector call.
pub struct Session<C: Connector> {
    // `None` only while a call is in flight on a worker, or after a
    // worker panic lost the handle.
    conn: Option<C::Conn>,
    target: String,
    runtime: Handle,
}

impl<C: Connector> std::fmt::Debug for Session<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("target", &self.target)
            .field("connected", &self.conn.is_some())
            .finish()
    }
}

impl<C: Connector> Session<C> {
    /// Sends one command and returns the device's textual response,
    /// using the connector's prompt-based completion.
    pub async fn send_com(&mut self, command: &str) -> Result<String, SessionError> {
        trace!("send_com on {}: {command:?}", self.target);
        let command = command.to_owned();
        self.dispatch(move |conn| conn.send_command(&command)).await
    }

    /// Enters configuration mode and applies `commands` in the given
    /// order, returning the combined output. The sequence is forwarded
    /// exactly as given; this layer never reorders or batches.
    pub async fn send_conf_set<I, S>(&mut self, commands: I) -> Result<String, SessionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let commands: Vec<String> = commands.into_iter().map(Into::into).collect();
        trace!("send_conf_set on {}: {} commands", self.target, commands.len());
        self.dispatch(move |conn| conn.send_config_set(&commands))
            .await
    }

    /// Sends one command with timing-based completion, for interactions
    /// that never return a recognizable prompt.
    pub async fn send_com_timing(&mut self, command: &str) -> Result<String, SessionError> {
        trace!("send_com_timing on {}: {command:?}", self.target);
        let command = command.to_owned();
        self.dispatch(move |conn| conn.send_command_timing(&command))
            .await
    }

    /// Disconnects, off-loop. Consumes the session.
    pub async fn close(mut self) -> Result<(), SessionError> {
        debug!("closing session to {}", self.target);
        let mut conn = self.conn.take().ok_or(SessionError::NotConnected)?;
        self.runtime
            .spawn_blocking(move || conn.disconnect())
            .await??;
        Ok(())
    }

    /// Runs one blocking connector call on a worker, shuttling the
    /// handle out and back. If the worker panics the handle is lost and
    /// every later call reports [`SessionError::NotConnected`].
    async fn dispatch<T, F>(&mut self, op: F) -> Result<T, SessionError>
    where
        T: Send + 'static,
        F: FnOnce(&mut C::Conn) -> Result<T, ConnectorError> + Send + 'static,
    {
        let mut conn = self.conn.take().ok_or(SessionError::NotConnected)?;
        let (conn, result) = self
            .runtime
            .spawn_blocking(move || {
                let result = op(&mut conn);
                (conn, result)
            })
            .await?;
        self.conn = Some(conn);
        Ok(result?)
    }
}
