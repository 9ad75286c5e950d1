// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Remote calls against the zfssnapshots endpoint

use crate::error::Result;
use crate::types::ZFSSnapshot;
use async_trait::async_trait;
use kube::api::{DeleteParams, GetParams, ListParams, PostParams};
use kube::core::ObjectList;
use kube::{Api, Client, ResourceExt};
use tracing::debug;

/// The remote operations a `ZfsSnapshotClient` delegates to.
///
/// Every method defaults to the real API call, so a test double only
/// overrides what it needs to observe or fake.
#[async_trait]
pub trait SnapshotOps: Send + Sync {
    async fn get(
        &self,
        client: &Client,
        name: &str,
        namespace: &str,
        params: &GetParams,
    ) -> Result<ZFSSnapshot> {
        Ok(snapshots(client, namespace).get_with(name, params).await?)
    }

    async fn list(
        &self,
        client: &Client,
        namespace: &str,
        params: &ListParams,
    ) -> Result<ObjectList<ZFSSnapshot>> {
        Ok(snapshots(client, namespace).list(params).await?)
    }

    async fn delete(
        &self,
        client: &Client,
        name: &str,
        namespace: &str,
        params: &DeleteParams,
    ) -> Result<()> {
        snapshots(client, namespace)
            .delete(name, params)
            .await?
            .either(
                |snap| debug!("Deletion of zfssnap {} in progress", snap.name_any()),
                |_| debug!("Deleted zfssnap {}", name),
            );
        Ok(())
    }

    async fn create(
        &self,
        client: &Client,
        snapshot: &ZFSSnapshot,
        namespace: &str,
    ) -> Result<ZFSSnapshot> {
        Ok(snapshots(client, namespace)
            .create(&PostParams::default(), snapshot)
            .await?)
    }

    async fn update(
        &self,
        client: &Client,
        snapshot: &ZFSSnapshot,
        namespace: &str,
    ) -> Result<ZFSSnapshot> {
        Ok(snapshots(client, namespace)
            .replace(&snapshot.name_any(), &PostParams::default(), snapshot)
            .await?)
    }
}

/// The backend used when none is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct KubeSnapshotOps;

impl SnapshotOps for KubeSnapshotOps {}

/// An empty namespace addresses zfssnapshots across all namespaces
fn snapshots(client: &Client, namespace: &str) -> Api<ZFSSnapshot> {
    if namespace.is_empty() {
        Api::all(client.clone())
    } else {
        Api::namespaced(client.clone(), namespace)
    }
}
