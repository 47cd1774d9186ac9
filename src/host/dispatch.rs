use std::io::{BufRead, Write};

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::message::Message;
use super::session::Session;
use crate::clipboard::{ClipboardProvider, Register, RegType};
use crate::error::ClipmockError;

/// Counters reported when the host loop ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostStats {
    pub requests: usize,
    pub errors: usize,
    pub notifications: usize,
}

/// Routes host requests to a loaded clipboard provider.
pub struct PluginHost<P> {
    provider: P,
}

impl<P: ClipboardProvider> PluginHost<P> {
    pub fn new(provider: P) -> Self {
        log::info!(
            "Loaded plugin {} providing {:?}",
            provider.name(),
            provider.provides()
        );
        Self { provider }
    }

    pub fn into_provider(self) -> P {
        self.provider
    }

    /// Serves requests until the host closes the session.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        session: &mut Session<R, W>,
    ) -> Result<HostStats, ClipmockError> {
        let mut stats = HostStats::default();

        while let Some(message) = session.recv()? {
            match message {
                Message::Request {
                    msgid,
                    method,
                    params,
                } => {
                    stats.requests += 1;
                    let response = match self.handle(&method, params) {
                        Ok(result) => Message::success(msgid, result),
                        Err(e) => {
                            stats.errors += 1;
                            log::warn!("Request {} ({}) failed: {}", msgid, method, e);
                            Message::failure(msgid, e.to_string())
                        }
                    };
                    session.send(&response)?;
                }
                Message::Notification { method, .. } => {
                    stats.notifications += 1;
                    log::debug!("Ignoring notification {}", method);
                }
                Message::Response { msgid, .. } => {
                    log::warn!("Unexpected response {} from host", msgid);
                }
            }
        }

        log::info!(
            "Session closed after {} request(s), {} error(s)",
            stats.requests,
            stats.errors
        );
        Ok(stats)
    }

    /// Handles one request and returns its result value.
    pub fn handle(&mut self, method: &str, params: Value) -> Result<Value, ClipmockError> {
        match method {
            "clipboard_get" => {
                let (register,): (Register,) = decode_params(method, params)?;
                let contents = self.provider.get(register)?;
                Ok(json!(contents))
            }
            "clipboard_set" => {
                let (lines, regtype, register): (Vec<String>, RegType, Register) =
                    decode_params(method, params)?;
                self.provider.set(lines, regtype, register);
                Ok(Value::Null)
            }
            "provides" => Ok(json!(self.provider.provides())),
            "poll" => Ok(json!("ok")),
            _ => Err(ClipmockError::UnknownMethod(method.to_string())),
        }
    }
}

fn decode_params<T: DeserializeOwned>(method: &str, params: Value) -> Result<T, ClipmockError> {
    if !params.is_array() {
        return Err(ClipmockError::InvalidMessage(format!(
            "params for {} must be an array",
            method
        )));
    }
    serde_json::from_value(params)
        .map_err(|e| ClipmockError::InvalidMessage(format!("bad params for {}: {}", method, e)))
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod dispatch_tests;
