// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client bootstrap strategies

use crate::error::{Result, SnapshotClientError};
use async_trait::async_trait;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use tracing::{debug, instrument};

/// Produces the cluster client a `ZfsSnapshotClient` talks through.
///
/// Both methods default to the real bootstrap; implementors override
/// only the strategy they want to replace.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Resolve a client from ambient credentials (kubeconfig or in-cluster)
    async fn connect_default(&self) -> Result<Client> {
        default_client().await
    }

    /// Resolve a client from the kubeconfig file at `kubeconfig_path`
    async fn connect_from_path(&self, kubeconfig_path: &str) -> Result<Client> {
        client_from_kubeconfig_path(kubeconfig_path).await
    }
}

/// The connector used when none is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct KubeConnector;

impl Connector for KubeConnector {}

/// Create a client from the inferred configuration
pub async fn default_client() -> Result<Client> {
    let config = KConfig::infer()
        .await
        .map_err(|e| SnapshotClientError::Kubeconfig(format!("Failed to infer config: {}", e)))?;

    debug!("Inferred cluster config for {}", config.cluster_url);

    Client::try_from(config)
        .map_err(|e| SnapshotClientError::Kubeconfig(format!("Failed to create client: {}", e)))
}

/// Create a client from a kubeconfig file on disk
#[instrument]
pub async fn client_from_kubeconfig_path(kubeconfig_path: &str) -> Result<Client> {
    let kubeconfig = tokio::fs::read_to_string(kubeconfig_path)
        .await
        .map_err(|e| {
            SnapshotClientError::Kubeconfig(format!(
                "Failed to read kubeconfig {}: {}",
                kubeconfig_path, e
            ))
        })?;

    client_from_kubeconfig(&kubeconfig).await.map_err(|e| match e {
        SnapshotClientError::Kubeconfig(msg) => {
            SnapshotClientError::Kubeconfig(format!("{} ({})", msg, kubeconfig_path))
        }
        other => other,
    })
}

/// Create a client from kubeconfig contents
pub async fn client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| SnapshotClientError::Kubeconfig(format!("Failed to parse kubeconfig: {}", e)))?;

    let client_config =
        KConfig::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| {
                SnapshotClientError::Kubeconfig(format!("Failed to create config: {}", e))
            })?;

    debug!("Loaded kubeconfig for {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| SnapshotClientError::Kubeconfig(format!("Failed to create client: {}", e)))
}
