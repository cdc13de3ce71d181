//! Caller-supplied connection parameters.
//!
//! [`HostConfig`] is an open-ended map from connection-parameter names to
//! values. The facade stores it unchanged and hands it verbatim to the
//! connector at session open; which keys are recognized (address, device
//! type, credentials, port, timeouts, ...) is entirely the connector's
//! contract, and no validation happens at this layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Parameter keys whose values never appear in `Debug` output.
const REDACTED_KEYS: &[&str] = &["password", "secret", "passphrase"];

/// An open-ended set of named connection parameters.
///
/// Built up with [`HostConfig::set`] and passed verbatim to
/// [`Connector::connect`](crate::connector::Connector::connect).
/// Values are [`serde_json::Value`], so strings, integers and booleans
/// all fit without this layer caring which keys hold which.
///
/// ```
/// use aneter::host::HostConfig;
///
/// let host = HostConfig::new()
///     .set("ip", "10.0.0.1")
///     .set("device_type", "cisco_ios")
///     .set("username", "admin")
///     .set("password", "secret")
///     .set("port", 22);
///
/// assert_eq!(host.get_str("device_type"), Some("cisco_ios"));
/// assert_eq!(host.get_u64("port"), Some(22));
/// ```
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostConfig {
    params: BTreeMap<String, Value>,
}

impl HostConfig {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one parameter, replacing any previous value for the key.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Looks up a parameter by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Looks up a string-valued parameter.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(Value::as_str)
    }

    /// Looks up an unsigned-integer parameter.
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.params.get(key).and_then(Value::as_u64)
    }

    /// Number of parameters set.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// True when no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterates parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.params.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Short target label for log lines: `addr:port` when both are set,
    /// falling back to the bare address. Reads `host` then `ip`, the two
    /// address keys blocking connectors conventionally accept.
    pub(crate) fn target(&self) -> String {
        let addr = self.get_str("host").or_else(|| self.get_str("ip"));
        match (addr, self.get_u64("port")) {
            (Some(addr), Some(port)) => format!("{addr}:{port}"),
            (Some(addr), None) => addr.to_string(),
            (None, _) => "<unknown host>".to_string(),
        }
    }
}

impl fmt::Debug for HostConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in &self.params {
            if REDACTED_KEYS.contains(&key.as_str()) {
                map.entry(key, &"<redacted>");
            } else {
                map.entry(key, value);
            }
        }
        map.finish()
    }
}

impl FromIterator<(String, Value)> for HostConfig {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}
