// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the directory bridge.

use std::path::PathBuf;

use dirchannel_core::error::Result;
use dirchannel_core::{DirectoryKind, MethodRequest, MethodResult, Platform};

/// Resolves the one well-known directory `getDownloads` answers with.
///
/// Implementations are stateless OS queries, so they are shared freely
/// across threads.
pub trait DirectoryResolver: Send + Sync {
    /// Operating system family this resolver talks to.
    fn platform(&self) -> Platform;

    /// What the returned directory is on this platform. iOS reports
    /// [`DirectoryKind::SandboxedDocuments`] because it has no public
    /// Downloads folder.
    fn directory_kind(&self) -> DirectoryKind;

    /// Absolute path of the platform's downloads directory.
    ///
    /// Fails only when the OS path provider gives back nothing usable.
    fn resolve_downloads_directory(&self) -> Result<PathBuf>;
}

/// Something that answers method calls arriving on a channel.
pub trait MethodHandler: Send + Sync {
    /// Produce exactly one result for the request. Never panics on
    /// unknown input; unsupported methods get a failure result.
    fn handle(&self, request: &MethodRequest) -> MethodResult;
}

impl<T: DirectoryResolver + ?Sized> DirectoryResolver for Box<T> {
    fn platform(&self) -> Platform {
        (**self).platform()
    }

    fn directory_kind(&self) -> DirectoryKind {
        (**self).directory_kind()
    }

    fn resolve_downloads_directory(&self) -> Result<PathBuf> {
        (**self).resolve_downloads_directory()
    }
}
