// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Helm chart installation

use crate::error::{AddOnError, Result};
use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, instrument, warn};

/// Everything the installer needs to install or upgrade one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub chart: String,
    pub version: String,
    pub release: String,
    pub repository: String,
    pub namespace: String,
    pub values: Value,
}

/// Handle to a chart release accepted by the installer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRelease {
    pub release: String,
    pub chart: String,
    pub version: String,
    pub namespace: String,
}

impl ChartRelease {
    pub fn from_request(request: &ChartRequest) -> Self {
        Self {
            release: request.release.clone(),
            chart: request.chart.clone(),
            version: request.version.clone(),
            namespace: request.namespace.clone(),
        }
    }
}

/// Installs Helm charts into a cluster.
///
/// Resolves once the request has been accepted; chart readiness is not awaited.
pub trait ChartInstaller: Send + Sync {
    fn install<'a>(&'a self, request: ChartRequest) -> BoxFuture<'a, Result<ChartRelease>>;
}

/// Installer that drives the `helm` CLI with `upgrade --install`, so repeated
/// requests update the release in place.
#[derive(Debug, Clone)]
pub struct HelmCliInstaller {
    binary: String,
    kube_context: Option<String>,
    dry_run: bool,
}

impl Default for HelmCliInstaller {
    fn default() -> Self {
        Self::new("helm")
    }
}

impl HelmCliInstaller {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            kube_context: None,
            dry_run: false,
        }
    }

    pub fn with_kube_context(mut self, context: Option<String>) -> Self {
        self.kube_context = context;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Command line arguments for `request`; values are read from stdin
    pub fn args(&self, request: &ChartRequest) -> Vec<String> {
        let mut args: Vec<String> = [
            "upgrade",
            "--install",
            request.release.as_str(),
            request.chart.as_str(),
            "--repo",
            request.repository.as_str(),
            "--version",
            request.version.as_str(),
            "--namespace",
            request.namespace.as_str(),
            "--values",
            "-",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        if let Some(context) = &self.kube_context {
            args.push("--kube-context".to_string());
            args.push(context.clone());
        }
        if self.dry_run {
            args.push("--dry-run".to_string());
        }
        args
    }

    #[instrument(skip(self, request), fields(release = %request.release, chart = %request.chart, version = %request.version))]
    async fn run(&self, request: ChartRequest) -> Result<ChartRelease> {
        let values_yaml = serde_yaml::to_string(&request.values)?;
        debug!("Chart values:\n{}", values_yaml);

        info!(
            "Installing chart {} from {} into namespace {}",
            request.chart, request.repository, request.namespace
        );

        let mut child = Command::new(&self.binary)
            .args(self.args(&request))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| AddOnError::HelmError(format!("Failed to run {}: {}", self.binary, e)))?;

        // helm may exit before reading its values; its stderr explains why
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(values_yaml.as_bytes()).await,
            None => Ok(()),
        };

        let output = child.wait_with_output().await?;
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            return Err(AddOnError::HelmError(format!(
                "helm upgrade --install {} failed: {}",
                request.release,
                stderr.trim()
            )));
        }
        written.map_err(|e| {
            AddOnError::HelmError(format!("Failed to pass values to {}: {}", self.binary, e))
        })?;
        if !stderr.trim().is_empty() {
            warn!("helm stderr: {}", stderr.trim());
        }

        info!("Chart release {} accepted", request.release);
        Ok(ChartRelease::from_request(&request))
    }
}

impl ChartInstaller for HelmCliInstaller {
    fn install<'a>(&'a self, request: ChartRequest) -> BoxFuture<'a, Result<ChartRelease>> {
        self.run(request).boxed()
    }
}
