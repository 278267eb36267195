// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JSON method codec for the directory channel.
//
// Envelope layout, UTF-8 JSON on the wire:
//
//   request:  {"method": "getDownloads", "args": null}
//   success:  [{"absPath": "/storage/emulated/0/Download"}]
//   failure:  ["UNIMPLEMENTED", "method not implemented", null]
//
// A one-element array is a success, a three-element array is a failure.
// Anything else is rejected with `DirChannelError::Envelope`.

use serde_json::{Map, Value, json};

use crate::error::{DirChannelError, Result};
use crate::types::{ABS_PATH_KEY, ErrorCode, MethodRequest, MethodResult};

/// Encode a method call for sending over the channel.
pub fn encode_request(request: &MethodRequest) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(request)?)
}

/// Decode a method call received from the channel.
pub fn decode_request(bytes: &[u8]) -> Result<MethodRequest> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| DirChannelError::Envelope(format!("request is not JSON: {e}")))?;
    if !value.is_object() {
        return Err(DirChannelError::Envelope(
            "request must be a JSON object".into(),
        ));
    }
    serde_json::from_value(value)
        .map_err(|e| DirChannelError::Envelope(format!("invalid request: {e}")))
}

/// Encode the reply to a method call.
pub fn encode_result(result: &MethodResult) -> Result<Vec<u8>> {
    let envelope = match result {
        MethodResult::Success { abs_path } => {
            let mut payload = Map::new();
            payload.insert(ABS_PATH_KEY.to_owned(), Value::String(abs_path.clone()));
            json!([payload])
        }
        MethodResult::Failure { code, message } => json!([code.as_str(), message, Value::Null]),
    };
    Ok(serde_json::to_vec(&envelope)?)
}

/// Decode a reply on the calling side.
pub fn decode_result(bytes: &[u8]) -> Result<MethodResult> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| DirChannelError::Envelope(format!("reply is not JSON: {e}")))?;
    let Value::Array(items) = value else {
        return Err(DirChannelError::Envelope("reply must be a JSON array".into()));
    };

    match items.as_slice() {
        [payload] => {
            let abs_path = payload
                .get(ABS_PATH_KEY)
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    DirChannelError::Envelope(format!("success reply has no string `{ABS_PATH_KEY}`"))
                })?;
            if abs_path.is_empty() {
                return Err(DirChannelError::Envelope(format!(
                    "success reply has an empty `{ABS_PATH_KEY}`"
                )));
            }
            Ok(MethodResult::success(abs_path))
        }
        [code, message, _details] => {
            let code_str = code
                .as_str()
                .ok_or_else(|| DirChannelError::Envelope("error code must be a string".into()))?;
            let code = ErrorCode::parse(code_str).ok_or_else(|| {
                DirChannelError::Envelope(format!("unknown error code {code_str:?}"))
            })?;
            let message = message
                .as_str()
                .ok_or_else(|| DirChannelError::Envelope("error message must be a string".into()))?;
            Ok(MethodResult::failure(code, message))
        }
        other => Err(DirChannelError::Envelope(format!(
            "reply array has {} elements, expected 1 or 3",
            other.len()
        ))),
    }
}
