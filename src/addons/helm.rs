// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Shared plumbing for add-ons that install a Helm chart

use crate::cluster::ClusterInfo;
use crate::error::Result;
use crate::kubernetes::{ensure_namespace_exists, ChartRelease, ChartRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

/// Coordinates of the chart an add-on installs
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HelmChartProps {
    pub name: String,
    pub namespace: String,
    pub chart: String,
    pub version: String,
    pub release: String,
    pub repository: String,
}

/// Base for chart add-ons: installs the configured chart with caller-built values
#[derive(Debug, Clone)]
pub struct HelmAddOn {
    props: HelmChartProps,
}

impl HelmAddOn {
    pub fn new(props: HelmChartProps) -> Self {
        Self { props }
    }

    pub fn props(&self) -> &HelmChartProps {
        &self.props
    }

    /// Ensure the release namespace exists and submit the chart to the cluster's installer
    #[instrument(skip(self, cluster, values), fields(addon = %self.props.name, cluster = %cluster.name()))]
    pub async fn add_helm_chart(&self, cluster: &ClusterInfo, values: Value) -> Result<ChartRelease> {
        ensure_namespace_exists(cluster.client(), &self.props.namespace, cluster.dry_run()).await?;

        let request = ChartRequest {
            chart: self.props.chart.clone(),
            version: self.props.version.clone(),
            release: self.props.release.clone(),
            repository: self.props.repository.clone(),
            namespace: self.props.namespace.clone(),
            values,
        };
        let release = cluster.chart_installer().install(request).await?;

        info!(
            "Chart {}@{} released as {}/{}",
            release.chart, release.version, release.namespace, release.release
        );
        Ok(release)
    }
}
