// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android directory resolver via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. The resolver calls
// `Environment.getExternalStoragePublicDirectory(Environment.DIRECTORY_DOWNLOADS)`
// on the process JavaVM and returns its absolute path.
//
// The shared Downloads directory exists by OS guarantee, so no activity
// context or runtime permission is needed to learn its path.

#![cfg(target_os = "android")]

use std::path::PathBuf;

use jni::JavaVM;
use jni::objects::{JObject, JString, JValue};

use dirchannel_core::error::{DirChannelError, Result};
use dirchannel_core::{DirectoryKind, Platform};

use crate::paths;
use crate::traits::DirectoryResolver;

const ENVIRONMENT_CLASS: &str = "android/os/Environment";

// ---------------------------------------------------------------------------
// JNI bootstrap helpers
// ---------------------------------------------------------------------------

/// Obtain the process [`JavaVM`] from the global Android context.
///
/// `ndk_context::android_context()` holds the `JavaVM*` set by
/// `android_main` or `ANativeActivity_onCreate`.
fn java_vm() -> Result<JavaVM> {
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` returns the `JavaVM*` set by the NDK glue code.
    // The pointer is guaranteed valid for the lifetime of the process.
    unsafe { JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| DirChannelError::Bridge(format!("failed to obtain JavaVM: {e}")))
}

/// Convenience: map any `jni::errors::Error` into `DirChannelError::Bridge`.
fn jni_err(context: &str, e: jni::errors::Error) -> DirChannelError {
    DirChannelError::Bridge(format!("{context}: {e}"))
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Android implementation of [`DirectoryResolver`].
///
/// Zero-sized; the first JNI call happens when a path is requested.
#[derive(Debug, Default)]
pub struct AndroidResolver;

impl AndroidResolver {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryResolver for AndroidResolver {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn directory_kind(&self) -> DirectoryKind {
        DirectoryKind::PublicDownloads
    }

    /// Resolve the public Downloads directory, e.g. `/storage/emulated/0/Download`.
    fn resolve_downloads_directory(&self) -> Result<PathBuf> {
        let vm = java_vm()?;
        let mut env = vm
            .attach_current_thread()
            .map_err(|e| jni_err("attach_current_thread", e))?;

        // -- Environment.DIRECTORY_DOWNLOADS -----------------------------------
        let dir_type: JObject = env
            .get_static_field(ENVIRONMENT_CLASS, "DIRECTORY_DOWNLOADS", "Ljava/lang/String;")
            .map_err(|e| jni_err("Environment.DIRECTORY_DOWNLOADS", e))?
            .l()
            .map_err(|e| jni_err("DIRECTORY_DOWNLOADS->l", e))?;

        // -- Environment.getExternalStoragePublicDirectory(type) ---------------
        let dir_file: JObject = env
            .call_static_method(
                ENVIRONMENT_CLASS,
                "getExternalStoragePublicDirectory",
                "(Ljava/lang/String;)Ljava/io/File;",
                &[JValue::Object(&dir_type)],
            )
            .map_err(|e| jni_err("getExternalStoragePublicDirectory", e))?
            .l()
            .map_err(|e| jni_err("getExternalStoragePublicDirectory->l", e))?;

        if dir_file.is_null() {
            return Err(DirChannelError::Unavailable(
                "getExternalStoragePublicDirectory returned null".into(),
            ));
        }

        // -- File.getAbsolutePath() --------------------------------------------
        let abs_path: JString = env
            .call_method(&dir_file, "getAbsolutePath", "()Ljava/lang/String;", &[])
            .map_err(|e| jni_err("File.getAbsolutePath", e))?
            .l()
            .map_err(|e| jni_err("getAbsolutePath->l", e))?
            .into();

        let abs_path: String = env
            .get_string(&abs_path)
            .map_err(|e| jni_err("get_string(absPath)", e))?
            .into();

        tracing::debug!(path = %abs_path, "Android: resolved public Downloads directory");
        paths::absolute_dir(abs_path)
    }
}
