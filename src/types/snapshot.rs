// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::VOLUME_LABEL;
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// Properties of the source volume captured when the snapshot was taken
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[kube(
    group = "zfs.openebs.io",
    version = "v1",
    kind = "ZFSSnapshot",
    plural = "zfssnapshots",
    shortname = "zfssnap"
)]
#[kube(namespaced)]
#[kube(status = "SnapStatus")]
#[serde(rename_all = "camelCase")]
pub struct ZFSSnapshotSpec {
    #[serde(rename = "ownerNodeID", skip_serializing_if = "Option::is_none")]
    pub owner_node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recordsize: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volblocksize: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyformat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keylocation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thin_provision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnapStatus {
    /// Pending, Ready or Failed as reported by the node agent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl ZFSSnapshot {
    /// Name of the ZFSVolume this snapshot belongs to, if labelled
    pub fn volume_name(&self) -> Option<&str> {
        self.metadata
            .labels
            .as_ref()
            .and_then(|labels| labels.get(VOLUME_LABEL))
            .map(String::as_str)
    }

    pub fn state(&self) -> Option<&str> {
        self.status.as_ref().and_then(|s| s.state.as_deref())
    }

    /// Check if the node agent has finished taking the snapshot
    pub fn is_ready(&self) -> bool {
        self.state() == Some("Ready")
    }
}
