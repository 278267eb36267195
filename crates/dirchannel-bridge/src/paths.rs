// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Validation shared by every resolver variant. Kept free of platform code so
// it is tested on the host.

use std::path::PathBuf;

use dirchannel_core::error::{DirChannelError, Result};

/// Accept a path string from an OS provider if it is non-empty and absolute.
pub fn absolute_dir(raw: impl Into<String>) -> Result<PathBuf> {
    let raw = raw.into();
    if raw.is_empty() {
        return Err(DirChannelError::Unavailable(
            "path provider returned an empty path".into(),
        ));
    }
    let path = PathBuf::from(raw);
    if !path.is_absolute() {
        return Err(DirChannelError::Unavailable(format!(
            "path provider returned a relative path: {}",
            path.display()
        )));
    }
    Ok(path)
}

/// Take the first entry of a directory search path, as Foundation's search
/// path functions return them.
pub fn first_search_path_entry<I>(entries: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = String>,
{
    let first = entries.into_iter().next().ok_or_else(|| {
        DirChannelError::Unavailable("directory search path is empty".into())
    })?;
    absolute_dir(first)
}
