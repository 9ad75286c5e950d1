// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotClientError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    Kubeconfig(String),

    #[error("{0}")]
    InvalidArgument(String),

    // Wrapping variants print their cause inline and report no `source()`.
    #[error("failed to get clientset: {0}")]
    Clientset(Box<SnapshotClientError>),

    #[error("failed to serialize zfssnap {name}: {error}")]
    Serialize {
        name: String,
        error: serde_json::Error,
    },

    #[error("{message}: {inner}")]
    Operation {
        message: String,
        inner: Box<SnapshotClientError>,
    },
}

impl SnapshotClientError {
    /// Wrap this error with an operation-specific message
    pub(crate) fn context(self, message: impl Into<String>) -> Self {
        SnapshotClientError::Operation {
            message: message.into(),
            inner: Box::new(self),
        }
    }

    /// The innermost error, skipping contextual wraps
    pub fn root(&self) -> &SnapshotClientError {
        match self {
            SnapshotClientError::Clientset(inner) => inner.root(),
            SnapshotClientError::Operation { inner, .. } => inner.root(),
            other => other,
        }
    }

    /// True when the API server answered 404 for the requested snapshot
    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), SnapshotClientError::KubeError(kube::Error::Api(err)) if err.code == 404)
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.root(), SnapshotClientError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, SnapshotClientError>;
