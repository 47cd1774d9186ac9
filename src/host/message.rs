use serde_json::{Value, json};

use crate::error::ClipmockError;

const REQUEST: u64 = 0;
const RESPONSE: u64 = 1;
const NOTIFICATION: u64 = 2;

/// One frame of the host session.
///
/// Frames are JSON arrays laid out like msgpack-rpc messages:
/// `[0, msgid, method, params]`, `[1, msgid, error, result]` and
/// `[2, method, params]`.
///
/// Request params stay raw so a request with a readable msgid always gets a
/// response, even when its params turn out to be malformed.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Request {
        msgid: u64,
        method: String,
        params: Value,
    },
    Response {
        msgid: u64,
        error: Option<Value>,
        result: Value,
    },
    Notification {
        method: String,
        params: Vec<Value>,
    },
}

impl Message {
    pub fn success(msgid: u64, result: Value) -> Self {
        Message::Response {
            msgid,
            error: None,
            result,
        }
    }

    pub fn failure(msgid: u64, error: impl Into<String>) -> Self {
        Message::Response {
            msgid,
            error: Some(Value::String(error.into())),
            result: Value::Null,
        }
    }

    pub fn decode(line: &str) -> Result<Self, ClipmockError> {
        let value: Value = serde_json::from_str(line)
            .map_err(|e| ClipmockError::InvalidMessage(format!("not JSON: {}", e)))?;

        let Value::Array(frame) = value else {
            return Err(invalid("frame must be an array"));
        };

        let kind = frame
            .first()
            .and_then(Value::as_u64)
            .ok_or_else(|| invalid("missing message type"))?;

        match (kind, frame.as_slice()) {
            (REQUEST, [_, msgid, method, params]) => Ok(Message::Request {
                msgid: as_msgid(msgid)?,
                method: as_method(method)?,
                params: params.clone(),
            }),
            (RESPONSE, [_, msgid, error, result]) => Ok(Message::Response {
                msgid: as_msgid(msgid)?,
                error: (!error.is_null()).then(|| error.clone()),
                result: result.clone(),
            }),
            (NOTIFICATION, [_, method, params]) => Ok(Message::Notification {
                method: as_method(method)?,
                params: as_params(params)?,
            }),
            (REQUEST | RESPONSE | NOTIFICATION, _) => Err(invalid(&format!(
                "wrong arity {} for message type {}",
                frame.len(),
                kind
            ))),
            _ => Err(invalid(&format!("unknown message type {}", kind))),
        }
    }

    pub fn encode(&self) -> String {
        let value = match self {
            Message::Request {
                msgid,
                method,
                params,
            } => json!([REQUEST, msgid, method, params]),
            Message::Response {
                msgid,
                error,
                result,
            } => json!([RESPONSE, msgid, error, result]),
            Message::Notification { method, params } => json!([NOTIFICATION, method, params]),
        };
        value.to_string()
    }
}

fn invalid(reason: &str) -> ClipmockError {
    ClipmockError::InvalidMessage(reason.to_string())
}

fn as_msgid(value: &Value) -> Result<u64, ClipmockError> {
    value.as_u64().ok_or_else(|| invalid("msgid must be an unsigned integer"))
}

fn as_method(value: &Value) -> Result<String, ClipmockError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid("method must be a string"))
}

fn as_params(value: &Value) -> Result<Vec<Value>, ClipmockError> {
    value
        .as_array()
        .cloned()
        .ok_or_else(|| invalid("params must be an array"))
}
