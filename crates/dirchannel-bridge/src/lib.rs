// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! dirchannel — native directory resolvers and the channel endpoint.
//!
//! The resolver variant is picked at build time: JNI on Android, objc2 on
//! iOS, and an environment-driven stub everywhere else so desktop and CI
//! builds can still drive the endpoint.

pub mod channel;
pub mod messenger;
pub mod paths;
pub mod traits;

#[cfg(target_os = "ios")]
pub mod ios;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(any(target_os = "ios", target_os = "android")))]
pub mod stub;

use dirchannel_core::ChannelConfig;

pub use channel::DirectoryChannel;
pub use messenger::{BinaryMessenger, ChannelRegistry};
pub use traits::{DirectoryResolver, MethodHandler};

/// Build the directory resolver for the target operating system.
pub fn platform_resolver(config: &ChannelConfig) -> Box<dyn DirectoryResolver> {
    #[cfg(target_os = "ios")]
    {
        let _ = config;
        // iOS: Foundation search paths through `objc2`.
        Box::new(ios::IosResolver::new())
    }
    #[cfg(target_os = "android")]
    {
        let _ = config;
        // Android: `android.os.Environment` through `jni-rs`.
        Box::new(android::AndroidResolver::new())
    }
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    {
        // DESKTOP/CI: stand-in so non-native builds can run the channel.
        Box::new(stub::StubResolver::new(config.downloads_override.clone()))
    }
}
