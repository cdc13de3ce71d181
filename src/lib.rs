//! # aneter - Async Sessions over Blocking Network-Device Libraries
//!
//! `aneter` is a Rust library that puts an asynchronous, scoped-session
//! facade in front of a synchronous SSH automation library for network
//! devices (routers, switches, firewalls). The wrapped library keeps
//! doing what it is good at (transport, prompt detection, paging
//! suppression, command-echo stripping) while `aneter` moves each of
//! its blocking calls onto a background worker, so a tokio event loop
//! is never stalled by device I/O.
//!
//! ## Features
//!
//! - **Non-blocking session lifecycle**: connect, command execution and
//!   disconnect all run on tokio's blocking-thread pool
//! - **Scoped sessions**: [`session::ConnectHandler::with_session`]
//!   guarantees disconnect runs exactly once on every exit path
//! - **Typed open failures**: connection timeout and credential
//!   rejection become dedicated error variants with stable messages;
//!   everything else passes through unchanged
//! - **Library-agnostic seam**: any blocking automation library plugs in
//!   through the [`connector::Connector`] and [`connector::Connection`]
//!   traits
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aneter::connector::{Connection, Connector};
//! use aneter::error::{ConnectorError, SessionError};
//! use aneter::host::HostConfig;
//! use aneter::session::ConnectHandler;
//!
//! // A thin binding to the blocking automation library of your choice.
//! struct CiscoConnector;
//! struct CiscoSession; // wraps the library's connection handle
//!
//! impl Connector for CiscoConnector {
//!     type Conn = CiscoSession;
//!     fn connect(&self, host: &HostConfig) -> Result<CiscoSession, ConnectorError> {
//!         unimplemented!("open the blocking library's connection here")
//!     }
//! }
//!
//! impl Connection for CiscoSession {
//!     fn send_command(&mut self, command: &str) -> Result<String, ConnectorError> {
//!         unimplemented!()
//!     }
//!     fn send_config_set(&mut self, commands: &[String]) -> Result<String, ConnectorError> {
//!         unimplemented!()
//!     }
//!     fn send_command_timing(&mut self, command: &str) -> Result<String, ConnectorError> {
//!         unimplemented!()
//!     }
//!     fn disconnect(&mut self) -> Result<(), ConnectorError> {
//!         unimplemented!()
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), SessionError> {
//!     let host = HostConfig::new()
//!         .set("ip", "10.0.0.1")
//!         .set("device_type", "cisco_ios")
//!         .set("username", "admin")
//!         .set("password", "secret")
//!         .set("port", 22);
//!
//!     let handler = ConnectHandler::new(CiscoConnector, host);
//!     let hostname = handler
//!         .with_session(async |session| {
//!             session.send_conf_set(["hostname R1", "end"]).await?;
//!             session.send_com("show run | include hostname").await
//!         })
//!         .await?;
//!
//!     println!("{hostname}");
//!     Ok(())
//! }
//! ```
//!
//! ## Main Components
//!
//! - [`session::ConnectHandler`] - Stores configuration, opens scoped sessions
//! - [`session::Session`] - One established device session
//! - [`connector::Connector`] / [`connector::Connection`] - The blocking-library seam
//! - [`error::SessionError`] - Errors surfaced by the facade
//! - [`host::HostConfig`] - Open-ended connection parameters

pub mod connector;
pub mod error;
pub mod host;
pub mod session;
