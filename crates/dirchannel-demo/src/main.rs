// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// dirchannel demo host
//
// Plays the part of the UI runtime: initialises logging, loads the channel
// config, registers the directory channel and calls it. Each method name on
// the command line is sent over the channel (default: `getDownloads`).
//
//   dirchannel-demo [--config <path>] [method ...]

mod host;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use dirchannel_core::ChannelConfig;
use dirchannel_core::human_errors::humanize_failure;
use dirchannel_core::{METHOD_GET_DOWNLOADS, MethodResult};

use host::DemoHost;

/// Register the directory channel and call it.
#[derive(Debug, Parser)]
#[command(name = "dirchannel-demo", version, about)]
struct Cli {
    /// JSON config file; defaults apply when it does not exist.
    #[arg(short, long, default_value = "dirchannel.json")]
    config: PathBuf,

    /// Method names to send over the channel.
    #[arg(default_value = METHOD_GET_DOWNLOADS)]
    methods: Vec<String>,
}

fn main() -> ExitCode {
    let Cli {
        config: config_path,
        methods,
    } = Cli::parse();

    let config = match ChannelConfig::load_or_default(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load {}: {e}", config_path.display());
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!(channel = %config.channel_name, "dirchannel demo starting");

    let host = DemoHost::new(&config);
    let mut all_ok = true;

    for method in &methods {
        match host.call(method) {
            Ok((reply, result)) => {
                println!("{method} -> {}", String::from_utf8_lossy(&reply));
                if let MethodResult::Failure { code, message } = &result {
                    let human = humanize_failure(*code, message);
                    println!("  {}", human.message);
                    println!("  {}", human.suggestion);
                    all_ok = false;
                } else if !host.directory_kind().is_shared() {
                    println!("  note: this is the app's private documents directory");
                }
            }
            Err(e) => {
                tracing::error!(method = %method, error = %e, "channel call failed");
                all_ok = false;
            }
        }
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_get_downloads() {
        let cli = Cli::try_parse_from(["dirchannel-demo"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("dirchannel.json"));
        assert_eq!(cli.methods, vec!["getDownloads".to_owned()]);
    }

    #[test]
    fn config_flag_and_methods() {
        let cli = Cli::try_parse_from([
            "dirchannel-demo",
            "--config",
            "/etc/dc.json",
            "listFiles",
            "getDownloads",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("/etc/dc.json"));
        assert_eq!(cli.methods, vec!["listFiles".to_owned(), "getDownloads".to_owned()]);
    }

    #[test]
    fn config_flag_without_value_is_rejected() {
        assert!(Cli::try_parse_from(["dirchannel-demo", "--config"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
