// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Host-side seam for method channels.
//
// A host UI runtime owns the real transport; all the endpoint needs from it
// is "register a handler for channel X". `ChannelRegistry` is an in-process
// implementation used by the demo host, benches and tests. Handlers are
// registered during setup (`&mut self`) and invoked through `&self`, so a
// built registry can be shared across threads without locking.

use std::collections::HashMap;
use std::sync::Arc;

use dirchannel_core::codec;
use dirchannel_core::error::{DirChannelError, Result};
use dirchannel_core::{MethodRequest, MethodResult};

use crate::traits::MethodHandler;

/// The registration half of a host runtime's message transport.
pub trait BinaryMessenger {
    /// Install `handler` for `channel`, replacing any previous handler.
    fn set_method_handler(&mut self, channel: &str, handler: Arc<dyn MethodHandler>);
}

/// In-process channel table.
#[derive(Default)]
pub struct ChannelRegistry {
    handlers: HashMap<String, Arc<dyn MethodHandler>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_handler(&self, channel: &str) -> bool {
        self.handlers.contains_key(channel)
    }

    /// Dispatch an already-decoded request.
    pub fn invoke(&self, channel: &str, request: &MethodRequest) -> Result<MethodResult> {
        let handler = self
            .handlers
            .get(channel)
            .ok_or_else(|| DirChannelError::NoHandler(channel.to_owned()))?;
        Ok(handler.handle(request))
    }

    /// Dispatch an encoded request and return the encoded reply.
    ///
    /// A request that fails to decode is answered with a `BAD_ENVELOPE`
    /// failure rather than an error, so the caller always gets a reply.
    pub fn send(&self, channel: &str, message: &[u8]) -> Result<Vec<u8>> {
        let handler = self
            .handlers
            .get(channel)
            .ok_or_else(|| DirChannelError::NoHandler(channel.to_owned()))?;

        let result = match codec::decode_request(message) {
            Ok(request) => handler.handle(&request),
            Err(e) => {
                tracing::warn!(channel, error = %e, "dropping malformed request");
                MethodResult::failure(e.code(), e.to_string())
            }
        };
        codec::encode_result(&result)
    }
}

impl BinaryMessenger for ChannelRegistry {
    fn set_method_handler(&mut self, channel: &str, handler: Arc<dyn MethodHandler>) {
        if self.handlers.insert(channel.to_owned(), handler).is_some() {
            tracing::info!(channel, "replaced existing method handler");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::thread;

    use dirchannel_core::{DirectoryKind, ErrorCode, Platform, DIR_CHANNEL};

    use crate::channel::DirectoryChannel;
    use crate::traits::DirectoryResolver;

    struct DocumentsResolver;

    impl DirectoryResolver for DocumentsResolver {
        fn platform(&self) -> Platform {
            Platform::Ios
        }

        fn directory_kind(&self) -> DirectoryKind {
            DirectoryKind::SandboxedDocuments
        }

        fn resolve_downloads_directory(&self) -> Result<PathBuf> {
            crate::paths::first_search_path_entry(vec![
                "/var/mobile/Containers/Data/Application/1234/Documents".to_owned(),
            ])
        }
    }

    struct Echo(&'static str);

    impl MethodHandler for Echo {
        fn handle(&self, _request: &MethodRequest) -> MethodResult {
            MethodResult::success(self.0)
        }
    }

    fn registry() -> ChannelRegistry {
        let mut registry = ChannelRegistry::new();
        DirectoryChannel::new(DocumentsResolver).register(&mut registry);
        registry
    }

    #[test]
    fn register_installs_handler_under_channel_name() {
        let registry = registry();
        assert!(registry.has_handler(DIR_CHANNEL));
        assert!(!registry.has_handler("other/channel"));
    }

    #[test]
    fn invoke_get_downloads_returns_first_search_path_entry() {
        let result = registry()
            .invoke(DIR_CHANNEL, &MethodRequest::new("getDownloads"))
            .unwrap();
        assert_eq!(
            result.abs_path(),
            Some("/var/mobile/Containers/Data/Application/1234/Documents")
        );
    }

    #[test]
    fn send_round_trips_through_codec() {
        let registry = registry();
        let request = codec::encode_request(&MethodRequest::new("getDownloads")).unwrap();
        let reply = registry.send(DIR_CHANNEL, &request).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&reply).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "absPath": "/var/mobile/Containers/Data/Application/1234/Documents" }])
        );
    }

    #[test]
    fn send_unknown_method() {
        let registry = registry();
        let reply = registry
            .send(DIR_CHANNEL, br#"{"method":"listFiles"}"#)
            .unwrap();
        assert_eq!(
            codec::decode_result(&reply).unwrap(),
            MethodResult::not_implemented()
        );
    }

    #[test]
    fn malformed_request_gets_bad_envelope_reply() {
        let registry = registry();
        let reply = registry.send(DIR_CHANNEL, b"\x00garbage").unwrap();
        let result = codec::decode_result(&reply).unwrap();
        assert_eq!(result.error_code(), Some(ErrorCode::BadEnvelope));
    }

    #[test]
    fn unknown_channel_is_an_error() {
        let registry = registry();
        let err = registry
            .invoke("nobody/home", &MethodRequest::new("getDownloads"))
            .unwrap_err();
        assert!(matches!(err, DirChannelError::NoHandler(ref c) if c == "nobody/home"));
        assert!(registry.send("nobody/home", b"{}").is_err());
    }

    #[test]
    fn second_registration_replaces_first() {
        let mut registry = ChannelRegistry::new();
        registry.set_method_handler("c", Arc::new(Echo("/first")));
        registry.set_method_handler("c", Arc::new(Echo("/second")));
        let result = registry.invoke("c", &MethodRequest::new("x")).unwrap();
        assert_eq!(result.abs_path(), Some("/second"));
    }

    #[test]
    fn concurrent_invocations_agree() {
        let registry = Arc::new(registry());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    registry
                        .invoke(DIR_CHANNEL, &MethodRequest::new("getDownloads"))
                        .unwrap()
                })
            })
            .collect();

        let results: Vec<MethodResult> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
        assert!(results[0].is_success());
    }
}
