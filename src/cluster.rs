// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Handle to the cluster an add-on deploys into

use crate::kubernetes::{ChartInstaller, HelmCliInstaller, KubeManifestApplier, ManifestApplier};
use kube::Client;
use std::sync::Arc;

/// Target cluster passed to every add-on's `deploy`.
///
/// Bundles the API client with the collaborators that install charts and apply
/// manifests against it.
#[derive(Clone)]
pub struct ClusterInfo {
    name: String,
    client: Client,
    chart_installer: Arc<dyn ChartInstaller>,
    manifest_applier: Arc<dyn ManifestApplier>,
    dry_run: bool,
}

impl ClusterInfo {
    /// Cluster handle using the `helm` CLI and server-side apply through `client`
    pub fn new(name: impl Into<String>, client: Client) -> Self {
        Self {
            name: name.into(),
            chart_installer: Arc::new(HelmCliInstaller::default()),
            manifest_applier: Arc::new(KubeManifestApplier::new(client.clone())),
            client,
            dry_run: false,
        }
    }

    pub fn with_chart_installer(mut self, installer: Arc<dyn ChartInstaller>) -> Self {
        self.chart_installer = installer;
        self
    }

    pub fn with_manifest_applier(mut self, applier: Arc<dyn ManifestApplier>) -> Self {
        self.manifest_applier = applier;
        self
    }

    /// Have the API server validate namespace creation without persisting it
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn chart_installer(&self) -> &dyn ChartInstaller {
        self.chart_installer.as_ref()
    }

    pub fn manifest_applier(&self) -> &dyn ManifestApplier {
        self.manifest_applier.as_ref()
    }
}

impl std::fmt::Debug for ClusterInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClusterInfo")
            .field("name", &self.name)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}
