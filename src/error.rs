// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddOnError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Helm chart installation failed: {0}")]
    HelmError(String),

    #[error("Namespace creation failed: {0}")]
    NamespaceError(String),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Failed to resolve add-on options: {0}")]
    OptionsError(#[from] serde_json::Error),

    #[error("Failed to encode chart values: {0}")]
    ValuesError(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AddOnError>;
