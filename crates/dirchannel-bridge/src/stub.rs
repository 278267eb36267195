// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub resolver for desktop/CI builds where native mobile APIs are unavailable.
//
// Real implementations live in the `ios` and `android` modules. The stub
// answers from a configured override, then the desktop user's download
// folder as reported by `dirs` (XDG user dirs, Known Folders, or
// `~/Downloads` depending on the OS).

use std::path::PathBuf;

use dirchannel_core::error::{DirChannelError, Result};
use dirchannel_core::{DirectoryKind, Platform};

use crate::paths;
use crate::traits::DirectoryResolver;

/// Resolver returned on non-mobile platforms.
#[derive(Debug, Clone, Default)]
pub struct StubResolver {
    override_dir: Option<PathBuf>,
}

impl StubResolver {
    pub fn new(override_dir: Option<PathBuf>) -> Self {
        Self { override_dir }
    }
}

impl DirectoryResolver for StubResolver {
    fn platform(&self) -> Platform {
        Platform::Host
    }

    fn directory_kind(&self) -> DirectoryKind {
        DirectoryKind::HostDownloads
    }

    fn resolve_downloads_directory(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.override_dir {
            return paths::absolute_dir(dir.to_string_lossy());
        }
        match dirs::download_dir() {
            Some(dir) => paths::absolute_dir(dir.to_string_lossy()),
            None => {
                tracing::warn!("stub resolver has no override and no desktop download dir");
                Err(DirChannelError::PlatformUnavailable)
            }
        }
    }
}
