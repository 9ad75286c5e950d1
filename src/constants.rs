// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// ZFSSnapshot custom resource coordinates
pub mod resource {
    pub const GROUP: &str = "zfs.openebs.io";
    pub const VERSION: &str = "v1";
    pub const KIND: &str = "ZFSSnapshot";
    pub const PLURAL: &str = "zfssnapshots";
}

/// Environment variables read by `Config::from_env`
pub mod env {
    /// Namespace the ZFS-LocalPV driver keeps its snapshot objects in
    pub const NAMESPACE: &str = "OPENEBS_NAMESPACE";
    /// Optional kubeconfig path; unset or empty uses default resolution
    pub const KUBECONFIG_PATH: &str = "ZFSSNAP_KUBECONFIG";
}

/// Label carrying the ZFSVolume a snapshot was taken from
pub const VOLUME_LABEL: &str = "openebs.io/persistent-volume";
