// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes seams: cluster client bootstrap and the zfssnapshots API calls.

pub mod connect;
pub mod operations;

pub use connect::{Connector, KubeConnector};
pub use operations::{KubeSnapshotOps, SnapshotOps};
