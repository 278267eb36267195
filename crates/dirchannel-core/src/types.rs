// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the directory channel.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Channel the host UI runtime uses to reach the directory resolver.
pub const DIR_CHANNEL: &str = "app.yakka.example/dirChannel";

/// The single method answered on [`DIR_CHANNEL`].
pub const METHOD_GET_DOWNLOADS: &str = "getDownloads";

/// Key of the path entry in a successful `getDownloads` reply.
pub const ABS_PATH_KEY: &str = "absPath";

/// Message sent with every `UNIMPLEMENTED` failure.
pub const NOT_IMPLEMENTED_MESSAGE: &str = "method not implemented";

/// A single named invocation arriving over the channel.
///
/// Created by the transport for each call and dropped after dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodRequest {
    pub method: String,
    /// Call arguments. `getDownloads` takes none, so this is usually `Null`.
    #[serde(default, rename = "args")]
    pub arguments: Value,
}

impl MethodRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: Value::Null,
        }
    }

    pub fn with_arguments(mut self, arguments: Value) -> Self {
        self.arguments = arguments;
        self
    }
}

/// Machine-readable failure codes carried in a [`MethodResult::Failure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The method name is not one this channel answers.
    Unimplemented,
    /// The platform path provider gave back nothing usable.
    Unavailable,
    /// The request bytes could not be decoded. Produced by the transport,
    /// never by the endpoint.
    BadEnvelope,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unimplemented => "UNIMPLEMENTED",
            ErrorCode::Unavailable => "UNAVAILABLE",
            ErrorCode::BadEnvelope => "BAD_ENVELOPE",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "UNIMPLEMENTED" => Some(ErrorCode::Unimplemented),
            "UNAVAILABLE" => Some(ErrorCode::Unavailable),
            "BAD_ENVELOPE" => Some(ErrorCode::BadEnvelope),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of exactly one method call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodResult {
    Success { abs_path: String },
    Failure { code: ErrorCode, message: String },
}

impl MethodResult {
    pub fn success(abs_path: impl Into<String>) -> Self {
        MethodResult::Success {
            abs_path: abs_path.into(),
        }
    }

    pub fn failure(code: ErrorCode, message: impl Into<String>) -> Self {
        MethodResult::Failure {
            code,
            message: message.into(),
        }
    }

    /// The canonical reply to any method the channel does not answer.
    pub fn not_implemented() -> Self {
        Self::failure(ErrorCode::Unimplemented, NOT_IMPLEMENTED_MESSAGE)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MethodResult::Success { .. })
    }

    pub fn abs_path(&self) -> Option<&str> {
        match self {
            MethodResult::Success { abs_path } => Some(abs_path),
            MethodResult::Failure { .. } => None,
        }
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            MethodResult::Success { .. } => None,
            MethodResult::Failure { code, .. } => Some(*code),
        }
    }
}

/// Operating system family a resolver was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Android,
    Ios,
    /// Desktop or CI build with no mobile SDK behind it.
    Host,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::Host => "Host (stub)",
        };
        f.write_str(name)
    }
}

/// What a `getDownloads` reply actually points at.
///
/// The wire format is the same for every kind; this lets Rust callers see
/// that iOS hands back a private directory rather than a shared one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectoryKind {
    /// OS-designated shared Downloads folder, visible to other apps.
    PublicDownloads,
    /// The app's private Documents folder inside its sandbox.
    SandboxedDocuments,
    /// A desktop user's downloads folder, used by the host stub.
    HostDownloads,
}

impl DirectoryKind {
    pub fn is_shared(&self) -> bool {
        !matches!(self, DirectoryKind::SandboxedDocuments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_defaults_to_null_arguments() {
        let req = MethodRequest::new(METHOD_GET_DOWNLOADS);
        assert_eq!(req.method, "getDownloads");
        assert_eq!(req.arguments, Value::Null);
    }

    #[test]
    fn request_deserializes_without_args_field() {
        let req: MethodRequest = serde_json::from_value(json!({ "method": "getDownloads" })).unwrap();
        assert_eq!(req, MethodRequest::new("getDownloads"));
    }

    #[test]
    fn error_code_strings_match_serde_names() {
        for code in [
            ErrorCode::Unimplemented,
            ErrorCode::Unavailable,
            ErrorCode::BadEnvelope,
        ] {
            let via_serde = serde_json::to_value(code).unwrap();
            assert_eq!(via_serde, json!(code.as_str()));
            assert_eq!(ErrorCode::parse(code.as_str()), Some(code));
        }
        assert_eq!(ErrorCode::parse("NOPE"), None);
    }

    #[test]
    fn not_implemented_has_fixed_message() {
        let result = MethodResult::not_implemented();
        assert_eq!(
            result,
            MethodResult::Failure {
                code: ErrorCode::Unimplemented,
                message: "method not implemented".into(),
            }
        );
        assert!(!result.is_success());
        assert_eq!(result.abs_path(), None);
    }

    #[test]
    fn sandboxed_documents_are_not_shared() {
        assert!(DirectoryKind::PublicDownloads.is_shared());
        assert!(DirectoryKind::HostDownloads.is_shared());
        assert!(!DirectoryKind::SandboxedDocuments.is_shared());
    }
}
