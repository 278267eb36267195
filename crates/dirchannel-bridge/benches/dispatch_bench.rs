// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for method dispatch on the directory channel, both
// through the decoded `invoke` path and the full encode/send/decode path.

use std::path::PathBuf;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use dirchannel_bridge::{ChannelRegistry, DirectoryChannel, DirectoryResolver};
use dirchannel_core::codec;
use dirchannel_core::error::Result;
use dirchannel_core::{DIR_CHANNEL, DirectoryKind, MethodRequest, Platform};

// ---------------------------------------------------------------------------
// Helper: a resolver with a constant answer so the OS is out of the picture
// ---------------------------------------------------------------------------

struct ConstResolver(PathBuf);

impl DirectoryResolver for ConstResolver {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn directory_kind(&self) -> DirectoryKind {
        DirectoryKind::PublicDownloads
    }

    fn resolve_downloads_directory(&self) -> Result<PathBuf> {
        Ok(self.0.clone())
    }
}

fn registry() -> ChannelRegistry {
    let mut registry = ChannelRegistry::new();
    DirectoryChannel::new(ConstResolver(PathBuf::from("/storage/emulated/0/Download")))
        .register(&mut registry);
    registry
}

fn bench_invoke(c: &mut Criterion) {
    let registry = registry();
    let get_downloads = MethodRequest::new("getDownloads");
    let list_files = MethodRequest::new("listFiles");

    c.bench_function("invoke_get_downloads", |b| {
        b.iter(|| registry.invoke(black_box(DIR_CHANNEL), black_box(&get_downloads)))
    });

    c.bench_function("invoke_unimplemented", |b| {
        b.iter(|| registry.invoke(black_box(DIR_CHANNEL), black_box(&list_files)))
    });
}

fn bench_send(c: &mut Criterion) {
    let registry = registry();
    let message = codec::encode_request(&MethodRequest::new("getDownloads"))
        .expect("request encodes");

    c.bench_function("send_get_downloads_round_trip", |b| {
        b.iter(|| {
            let reply = registry
                .send(black_box(DIR_CHANNEL), black_box(&message))
                .expect("handler registered");
            codec::decode_result(&reply)
        })
    });
}

criterion_group!(benches, bench_invoke, bench_send);
criterion_main!(benches);
