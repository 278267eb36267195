// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stand-in for the host UI runtime: owns the channel registry and talks to
// it in encoded envelopes, the way a UI layer would.

use dirchannel_bridge::{ChannelRegistry, DirectoryChannel, platform_resolver};
use dirchannel_core::codec;
use dirchannel_core::error::Result;
use dirchannel_core::{ChannelConfig, DirectoryKind, MethodRequest, MethodResult};

pub struct DemoHost {
    channel: String,
    kind: DirectoryKind,
    registry: ChannelRegistry,
}

impl DemoHost {
    /// Build the resolver for this target and register the channel.
    pub fn new(config: &ChannelConfig) -> Self {
        let resolver = platform_resolver(config);
        let kind = resolver.directory_kind();

        let mut registry = ChannelRegistry::new();
        DirectoryChannel::from_config(config, resolver).register(&mut registry);

        Self {
            channel: config.channel_name.clone(),
            kind,
            registry,
        }
    }

    pub fn directory_kind(&self) -> DirectoryKind {
        self.kind
    }

    /// Send `method` with no arguments; return the raw reply and its decoding.
    pub fn call(&self, method: &str) -> Result<(Vec<u8>, MethodResult)> {
        let message = codec::encode_request(&MethodRequest::new(method))?;
        let reply = self.registry.send(&self.channel, &message)?;
        let result = codec::decode_result(&reply)?;
        Ok((reply, result))
    }
}
