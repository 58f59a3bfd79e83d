//! Config action server for the rich text editor plugins.
//!
//! Serves editor config files from the host's config directory so the
//! editors can load them from the control panel.
//!
//! Usage:
//!   rte-server --config-dir ./config --port 8080

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use rte_plugin::HostEnvironment;
use rte_server::{ServerState, build_router};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "rte-server")]
#[command(about = "Serves CKEditor and TinyMCE config files")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Address to bind
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Host config directory containing ckeditor/ and tinymce/
    #[arg(short, long, default_value = "config")]
    config_dir: PathBuf,

    /// Host CMS version, checked against each plugin's minimum
    #[arg(long)]
    host_version: Option<String>,

    /// Runtime version, checked against each plugin's minimum
    #[arg(long, default_value = "5.4")]
    runtime_version: String,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    if !args.config_dir.is_dir() {
        warn!("Config directory {:?} does not exist, every config will 404", args.config_dir);
    }

    let mut state = ServerState::new(&args.config_dir);
    if let Some(host_version) = &args.host_version {
        let env = HostEnvironment::new(host_version.clone(), args.runtime_version.clone());
        state.plugins.retain(|plugin| plugin.on_before_install(&env));
        if state.plugins.is_empty() {
            anyhow::bail!("No plugin is compatible with host {}", host_version);
        }
    }
    for plugin in &state.plugins {
        info!("Plugin enabled: {} {}", plugin.name, plugin.version);
    }

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .context("Invalid bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Serving editor configs from {:?} on http://{}", args.config_dir, addr);

    axum::serve(listener, build_router(Arc::new(state)))
        .await
        .context("HTTP server failed")?;
    Ok(())
}
