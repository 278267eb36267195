// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// iOS directory resolver via objc2.
//
// Requires compilation with the iOS SDK (Xcode). This module is cfg-gated to
// `target_os = "ios"` and will not compile on other platforms.
//
// iOS apps are sandboxed and have no public Downloads folder. `getDownloads`
// therefore answers with the app's Documents directory: the first entry of
// `NSSearchPathForDirectoriesInDomains(NSDocumentDirectory, NSUserDomainMask, YES)`.
// Callers that care about the difference check
// `DirectoryResolver::directory_kind()`.
//
// Foundation's path utilities are thread-safe, so unlike UIKit calls this
// does not require the main thread.

#![cfg(target_os = "ios")]

use std::path::PathBuf;

use objc2::rc::autoreleasepool;
use objc2_foundation::{
    NSSearchPathDirectory, NSSearchPathDomainMask, NSSearchPathForDirectoriesInDomains,
};

use dirchannel_core::error::Result;
use dirchannel_core::{DirectoryKind, Platform};

use crate::paths;
use crate::traits::DirectoryResolver;

/// iOS implementation of [`DirectoryResolver`].
#[derive(Debug, Default)]
pub struct IosResolver;

impl IosResolver {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryResolver for IosResolver {
    fn platform(&self) -> Platform {
        Platform::Ios
    }

    fn directory_kind(&self) -> DirectoryKind {
        DirectoryKind::SandboxedDocuments
    }

    fn resolve_downloads_directory(&self) -> Result<PathBuf> {
        // The search path array is autoreleased; copy the first entry out
        // before the pool drains.
        let first = autoreleasepool(|_| {
            // SAFETY: plain Foundation C function taking enum arguments; it
            // returns a retained NSArray<NSString> (possibly empty).
            #[allow(unused_unsafe)]
            let entries = unsafe {
                NSSearchPathForDirectoriesInDomains(
                    NSSearchPathDirectory::DocumentDirectory,
                    NSSearchPathDomainMask::UserDomainMask,
                    true,
                )
            };
            entries.firstObject().map(|dir| dir.to_string())
        });

        let path = paths::first_search_path_entry(first)?;
        tracing::debug!(
            path = %path.display(),
            "iOS: resolved sandboxed Documents directory in place of Downloads"
        );
        Ok(path)
    }
}
