// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

use super::ZfsSnapshotClient;
use crate::config::Config;
use crate::kubernetes::{Connector, KubeConnector, KubeSnapshotOps, SnapshotOps};
use kube::Client;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Builder for [`ZfsSnapshotClient`].
///
/// Options apply in call order; a later call overwrites an earlier one.
/// Nothing here touches the network or the filesystem, so an empty or
/// bogus kubeconfig path only surfaces once an operation runs.
#[derive(Default)]
pub struct ClientBuilder {
    client: Option<Client>,
    namespace: String,
    kubeconfig_path: String,
    connector: Option<Arc<dyn Connector>>,
    operations: Option<Arc<dyn SnapshotOps>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed namespace and kubeconfig path from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_namespace(&config.namespace)
            .with_kubeconfig_path(&config.kubeconfig_path)
    }

    /// Use an already connected client; no connector will be called
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_kubeconfig_path(mut self, path: impl Into<String>) -> Self {
        self.kubeconfig_path = path.into();
        self
    }

    /// Replace the strategy used to resolve the cluster client
    pub fn with_connector(mut self, connector: impl Connector + 'static) -> Self {
        self.connector = Some(Arc::new(connector));
        self
    }

    /// Replace the backend performing the remote calls
    pub fn with_operations(mut self, operations: impl SnapshotOps + 'static) -> Self {
        self.operations = Some(Arc::new(operations));
        self
    }

    pub fn build(self) -> ZfsSnapshotClient {
        ZfsSnapshotClient {
            clientset: OnceCell::new_with(self.client),
            kubeconfig_path: self.kubeconfig_path,
            namespace: self.namespace,
            connector: self.connector.unwrap_or_else(|| Arc::new(KubeConnector)),
            operations: self.operations.unwrap_or_else(|| Arc::new(KubeSnapshotOps)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockService;

    #[test]
    fn test_build_without_options() {
        let client = ClientBuilder::new().build();

        assert_eq!(client.namespace(), "");
        assert_eq!(client.kubeconfig_path(), "");
        assert!(!client.is_connected());
    }

    #[test]
    fn test_later_options_overwrite_earlier_ones() {
        let client = ClientBuilder::new()
            .with_namespace("first")
            .with_kubeconfig_path("/tmp/a")
            .with_namespace("second")
            .with_kubeconfig_path("/tmp/b")
            .build();

        assert_eq!(client.namespace(), "second");
        assert_eq!(client.kubeconfig_path(), "/tmp/b");
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            namespace: "openebs".to_string(),
            kubeconfig_path: "/etc/zfssnap/kubeconfig".to_string(),
        };

        let client = ClientBuilder::from_config(&config).build();

        assert_eq!(client.namespace(), "openebs");
        assert_eq!(client.kubeconfig_path(), "/etc/zfssnap/kubeconfig");
    }

    #[tokio::test]
    async fn test_with_client_is_connected_at_build() {
        let client = ClientBuilder::new()
            .with_client(MockService::new().into_client())
            .build();

        assert!(client.is_connected());
    }
}
