// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Call channel endpoint: routes method calls on the directory channel to a
// `DirectoryResolver` and turns the outcome into a `MethodResult`.
//
// Every call produces exactly one result. Resolver errors become
// `UNAVAILABLE` failures; unknown methods become `UNIMPLEMENTED` without
// touching the filesystem. Nothing is retried.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use dirchannel_core::error::{DirChannelError, Result};
use dirchannel_core::{
    ChannelConfig, DIR_CHANNEL, METHOD_GET_DOWNLOADS, MethodRequest, MethodResult,
};

use crate::messenger::BinaryMessenger;
use crate::paths;
use crate::traits::{DirectoryResolver, MethodHandler};

/// The directory channel handler.
pub struct DirectoryChannel<R> {
    name: String,
    resolver: R,
}

impl<R: DirectoryResolver> DirectoryChannel<R> {
    /// Endpoint on the default channel name.
    pub fn new(resolver: R) -> Self {
        Self::with_name(DIR_CHANNEL, resolver)
    }

    pub fn with_name(name: impl Into<String>, resolver: R) -> Self {
        Self {
            name: name.into(),
            resolver,
        }
    }

    pub fn from_config(config: &ChannelConfig, resolver: R) -> Self {
        Self::with_name(config.channel_name.clone(), resolver)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Resolve the downloads directory as a wire-ready string.
    fn downloads_path(&self) -> Result<String> {
        let path = self.resolver.resolve_downloads_directory()?;
        path_to_wire(&path)
    }
}

impl<R: DirectoryResolver + 'static> DirectoryChannel<R> {
    /// Hand this endpoint to the host. One-time setup; the host owns it
    /// afterwards.
    pub fn register(self, messenger: &mut dyn BinaryMessenger) {
        info!(
            channel = %self.name,
            platform = %self.resolver.platform(),
            kind = ?self.resolver.directory_kind(),
            "registering directory channel handler"
        );
        let name = self.name.clone();
        messenger.set_method_handler(&name, Arc::new(self));
    }
}

impl<R: DirectoryResolver> MethodHandler for DirectoryChannel<R> {
    #[instrument(skip_all, fields(channel = %self.name, method = %request.method))]
    fn handle(&self, request: &MethodRequest) -> MethodResult {
        if request.method != METHOD_GET_DOWNLOADS {
            debug!("method not implemented on this channel");
            return MethodResult::not_implemented();
        }

        match self.downloads_path() {
            Ok(abs_path) => {
                debug!(
                    path = %abs_path,
                    kind = ?self.resolver.directory_kind(),
                    "resolved downloads directory"
                );
                MethodResult::success(abs_path)
            }
            Err(e) => {
                warn!(error = %e, "downloads directory unavailable");
                MethodResult::failure(e.code(), e.to_string())
            }
        }
    }
}

/// Paths travel as absolute UTF-8 strings. Resolvers from outside this crate
/// may not go through `paths`, so the check is repeated here.
fn path_to_wire(path: &Path) -> Result<String> {
    let s = path.to_str().ok_or_else(|| {
        DirChannelError::Unavailable(format!(
            "directory path is not valid UTF-8: {}",
            path.display()
        ))
    })?;
    paths::absolute_dir(s)?;
    Ok(s.to_owned())
}
