// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster-facing collaborators: chart installation, manifest application and
//! namespace management.

pub mod helm;
pub mod manifest;
pub mod namespaces;

pub use helm::{ChartInstaller, ChartRelease, ChartRequest, HelmCliInstaller};
pub use manifest::{KubeManifestApplier, KubernetesManifest, ManifestApplier};
pub use namespaces::ensure_namespace_exists;
