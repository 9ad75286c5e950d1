// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace-scoped client for ZFSSnapshot custom resources.
//!
//! Every operation validates its input, resolves the cluster client (once,
//! then cached) and hands off to the configured [`SnapshotOps`] backend.
//! Failures come back wrapped with the operation, snapshot and namespace.

mod builder;

pub use builder::ClientBuilder;

use crate::error::{Result, SnapshotClientError};
use crate::kubernetes::{Connector, SnapshotOps};
use crate::types::ZFSSnapshot;
use kube::api::{DeleteParams, GetParams, ListParams, PropagationPolicy};
use kube::core::ObjectList;
use kube::{Client, ResourceExt};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument};

/// Client for create/get/list/delete/update of ZFSSnapshot resources
/// in a single namespace.
///
/// The cluster client is resolved on first use and kept for the lifetime
/// of this value; concurrent first use resolves it only once.
pub struct ZfsSnapshotClient {
    clientset: OnceCell<Client>,
    kubeconfig_path: String,
    namespace: String,
    connector: Arc<dyn Connector>,
    operations: Arc<dyn SnapshotOps>,
}

impl ZfsSnapshotClient {
    /// A client with default connector and backend and no namespace
    pub fn new() -> Self {
        ClientBuilder::new().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Switch the namespace subsequent operations target
    pub fn with_namespace(&mut self, namespace: impl Into<String>) -> &mut Self {
        self.namespace = namespace.into();
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn kubeconfig_path(&self) -> &str {
        &self.kubeconfig_path
    }

    /// Whether the cluster client has been resolved already
    pub fn is_connected(&self) -> bool {
        self.clientset.initialized()
    }

    async fn connect(&self) -> Result<Client> {
        if self.kubeconfig_path.is_empty() {
            debug!("Resolving cluster client from default credentials");
            self.connector.connect_default().await
        } else {
            debug!("Resolving cluster client from kubeconfig {}", self.kubeconfig_path);
            self.connector.connect_from_path(&self.kubeconfig_path).await
        }
    }

    /// The cached cluster client, resolving it on first use.
    /// A failed resolution is not cached.
    async fn client_or_cached(&self) -> Result<&Client> {
        self.clientset
            .get_or_try_init(|| async {
                let client = self
                    .connect()
                    .await
                    .map_err(|e| SnapshotClientError::Clientset(Box::new(e)))?;
                info!("Connected to Kubernetes cluster");
                Ok::<_, SnapshotClientError>(client)
            })
            .await
    }

    /// Create a snapshot in the target namespace
    #[instrument(skip(self, snapshot), fields(name = %snapshot.name_any(), namespace = %self.namespace))]
    pub async fn create(&self, snapshot: &ZFSSnapshot) -> Result<ZFSSnapshot> {
        let meta = &snapshot.metadata;
        if is_blank(&meta.name) && is_blank(&meta.generate_name) {
            return Err(SnapshotClientError::InvalidArgument(
                "failed to create zfssnap: missing zfssnap name".to_string(),
            ));
        }

        let context = || {
            format!(
                "failed to create zfssnap {} in namespace {}",
                snapshot.name_any(),
                self.namespace
            )
        };

        let client = self.client_or_cached().await.map_err(|e| e.context(context()))?;

        self.operations
            .create(client, snapshot, &self.namespace)
            .await
            .map_err(|e| e.context(context()))
    }

    /// Get a snapshot by name
    #[instrument(skip(self, params), fields(namespace = %self.namespace))]
    pub async fn get(&self, name: &str, params: &GetParams) -> Result<ZFSSnapshot> {
        if name.is_empty() {
            return Err(SnapshotClientError::InvalidArgument(
                "failed to get zfssnap: missing zfssnap name".to_string(),
            ));
        }

        let context = || format!("failed to get zfssnap {} in namespace {}", name, self.namespace);

        let client = self.client_or_cached().await.map_err(|e| e.context(context()))?;

        self.operations
            .get(client, name, &self.namespace, params)
            .await
            .map_err(|e| e.context(context()))
    }

    /// Get a snapshot by name, encoded as JSON
    #[instrument(skip(self, params), fields(namespace = %self.namespace))]
    pub async fn get_raw(&self, name: &str, params: &GetParams) -> Result<Vec<u8>> {
        if name.is_empty() {
            return Err(SnapshotClientError::InvalidArgument(
                "failed to get raw zfssnap: missing zfssnap name".to_string(),
            ));
        }

        let snapshot = self.get(name, params).await.map_err(|e| {
            e.context(format!(
                "failed to get raw zfssnap {} in namespace {}",
                name, self.namespace
            ))
        })?;

        serde_json::to_vec(&snapshot).map_err(|error| SnapshotClientError::Serialize {
            name: name.to_string(),
            error,
        })
    }

    /// List snapshots in the target namespace
    #[instrument(skip(self, params), fields(namespace = %self.namespace))]
    pub async fn list(&self, params: &ListParams) -> Result<ObjectList<ZFSSnapshot>> {
        let context = || format!("failed to list zfssnap in namespace {}", self.namespace);

        let client = self.client_or_cached().await.map_err(|e| e.context(context()))?;

        self.operations
            .list(client, &self.namespace, params)
            .await
            .map_err(|e| e.context(context()))
    }

    /// Delete a snapshot, waiting on dependents (foreground propagation)
    pub async fn delete(&self, name: &str) -> Result<()> {
        self.delete_with(name, &DeleteParams::default()).await
    }

    /// Delete a snapshot with caller supplied parameters.
    ///
    /// The propagation policy is always sent as `Foreground`, whatever
    /// `params` asks for.
    #[instrument(skip(self, params), fields(namespace = %self.namespace))]
    pub async fn delete_with(&self, name: &str, params: &DeleteParams) -> Result<()> {
        if name.is_empty() {
            return Err(SnapshotClientError::InvalidArgument(
                "failed to delete zfssnap: missing zfssnap name".to_string(),
            ));
        }

        let context = || format!("failed to delete zfssnap {} in namespace {}", name, self.namespace);

        let client = self.client_or_cached().await.map_err(|e| e.context(context()))?;

        let params = DeleteParams {
            propagation_policy: Some(PropagationPolicy::Foreground),
            ..params.clone()
        };

        self.operations
            .delete(client, name, &self.namespace, &params)
            .await
            .map_err(|e| e.context(context()))
    }

    /// Replace an existing snapshot in the target namespace
    #[instrument(skip(self, snapshot), fields(name = %snapshot.name_any(), namespace = %self.namespace))]
    pub async fn update(&self, snapshot: &ZFSSnapshot) -> Result<ZFSSnapshot> {
        if is_blank(&snapshot.metadata.name) {
            return Err(SnapshotClientError::InvalidArgument(
                "failed to update zfssnap: missing zfssnap name".to_string(),
            ));
        }

        let context = || {
            format!(
                "failed to update zfssnap {} in namespace {}",
                snapshot.name_any(),
                self.namespace
            )
        };

        let client = self.client_or_cached().await.map_err(|e| e.context(context()))?;

        self.operations
            .update(client, snapshot, &self.namespace)
            .await
            .map_err(|e| e.context(context()))
    }
}

impl Default for ZfsSnapshotClient {
    fn default() -> Self {
        Self::new()
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}
