// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kube::api::{GetParams, ListParams};
use kube::ResourceExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use zfssnap_client::config::Config;
use zfssnap_client::constants::env as keys;
use zfssnap_client::ClientBuilder;

/// Inspect and remove ZFSSnapshot resources
#[derive(Parser, Debug)]
#[command(name = "zfssnap", version, about, long_about = None)]
struct Args {
    /// Namespace holding the snapshots (defaults to $OPENEBS_NAMESPACE)
    #[arg(short, long)]
    namespace: Option<String>,

    /// Kubeconfig file (defaults to $ZFSSNAP_KUBECONFIG, then the usual resolution)
    #[arg(long)]
    kubeconfig: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List snapshots
    List {
        /// Only snapshots matching this label selector
        #[arg(short = 'l', long)]
        selector: Option<String>,
    },
    /// Print a snapshot as YAML
    Get {
        name: String,
        /// Print the JSON object as stored by the API server
        #[arg(long)]
        raw: bool,
    },
    /// Delete a snapshot (foreground propagation)
    Delete { name: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::from_lookup(|key| match key {
        keys::NAMESPACE if args.namespace.is_some() => args.namespace.clone(),
        keys::KUBECONFIG_PATH if args.kubeconfig.is_some() => args.kubeconfig.clone(),
        _ => std::env::var(key).ok(),
    })?;
    info!(
        "Configuration loaded: namespace={}, kubeconfig={}",
        config.namespace,
        if config.kubeconfig_path.is_empty() {
            "<default>"
        } else {
            config.kubeconfig_path.as_str()
        }
    );

    let client = ClientBuilder::from_config(&config).build();

    match args.command {
        Command::List { selector } => {
            let mut lp = ListParams::default();
            if let Some(selector) = selector.as_deref() {
                lp = lp.labels(selector);
            }
            let snapshots = client.list(&lp).await?;
            println!("{:<48} {:<40} {}", "NAME", "VOLUME", "STATE");
            for snap in &snapshots.items {
                println!(
                    "{:<48} {:<40} {}",
                    snap.name_any(),
                    snap.volume_name().unwrap_or("-"),
                    snap.state().unwrap_or("-")
                );
            }
        }
        Command::Get { name, raw } => {
            if raw {
                let bytes = client.get_raw(&name, &GetParams::default()).await?;
                println!("{}", String::from_utf8_lossy(&bytes));
            } else {
                let snap = client.get(&name, &GetParams::default()).await?;
                let yaml = serde_yaml::to_string(&snap).context("Failed to render snapshot")?;
                print!("{}", yaml);
            }
        }
        Command::Delete { name } => {
            client.delete(&name).await?;
            info!("{}", deletion_requested(&config.namespace, &name));
        }
    }

    Ok(())
}

/// Foreground deletion may still be in progress when the request returns
fn deletion_requested(namespace: &str, name: &str) -> String {
    format!(
        "Deletion of zfssnap {}/{} requested (foreground propagation)",
        namespace, name
    )
}
