// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::env as keys;
use anyhow::{Context, Result};
use std::env;

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace holding the ZFSSnapshot objects
    pub namespace: String,
    /// Kubeconfig file to connect with; empty means default resolution
    pub kubeconfig_path: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let namespace = lookup(keys::NAMESPACE)
            .filter(|ns| !ns.is_empty())
            .with_context(|| format!("{} environment variable not set", keys::NAMESPACE))?;
        let kubeconfig_path = lookup(keys::KUBECONFIG_PATH).unwrap_or_default();

        Ok(Config {
            namespace,
            kubeconfig_path,
        })
    }
}
