// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubevious add-on: installs the Kubevious Helm chart

use crate::addons::helm::{HelmAddOn, HelmChartProps};
use crate::addons::{ClusterAddOn, Deployment};
use crate::cluster::ClusterInfo;
use crate::constants::kubevious as defaults;
use crate::error::Result;
use crate::options::{resolve, set_path};
use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

/// User provided overrides for the Kubevious chart
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KubeviousAddOnProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// Base chart values; the add-on's own settings are written on top
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubevious_service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mysql_root_password: Option<String>,
}

/// Fully resolved Kubevious options
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KubeviousOptions {
    #[serde(flatten)]
    pub chart: HelmChartProps,
    pub values: Value,
    pub ingress_enabled: bool,
    pub kubevious_service_type: String,
    pub mysql_root_password: String,
}

impl Default for KubeviousOptions {
    fn default() -> Self {
        Self {
            chart: HelmChartProps {
                name: defaults::ADDON_NAME.to_string(),
                namespace: defaults::NAMESPACE.to_string(),
                chart: defaults::CHART.to_string(),
                version: defaults::VERSION.to_string(),
                release: defaults::RELEASE.to_string(),
                repository: defaults::REPOSITORY.to_string(),
            },
            values: json!({}),
            ingress_enabled: false,
            kubevious_service_type: defaults::SERVICE_TYPE.to_string(),
            mysql_root_password: defaults::MYSQL_ROOT_PASSWORD.to_string(),
        }
    }
}

pub struct KubeviousAddOn {
    options: KubeviousOptions,
    helm: HelmAddOn,
}

impl KubeviousAddOn {
    pub fn new(props: KubeviousAddOnProps) -> Result<Self> {
        let options: KubeviousOptions = resolve(&KubeviousOptions::default(), &props)?;
        let helm = HelmAddOn::new(options.chart.clone());
        Ok(Self { options, helm })
    }

    pub fn options(&self) -> &KubeviousOptions {
        &self.options
    }
}

/// Build the chart values from the resolved options
pub fn populate_values(options: &KubeviousOptions) -> Value {
    let mut values = options.values.clone();
    set_path(&mut values, "ingress.enabled", json!(options.ingress_enabled));
    set_path(
        &mut values,
        "kubevious.service.type",
        json!(options.kubevious_service_type),
    );
    set_path(
        &mut values,
        "mysql.root.password",
        json!(options.mysql_root_password),
    );
    values
}

impl ClusterAddOn for KubeviousAddOn {
    fn name(&self) -> &str {
        &self.options.chart.name
    }

    fn deploy<'a>(&'a self, cluster: &'a ClusterInfo) -> BoxFuture<'a, Result<Deployment>> {
        async move {
            let values = populate_values(&self.options);
            debug!("Populated Kubevious chart values");
            let release = self.helm.add_helm_chart(cluster, values).await?;
            Ok(Deployment::Chart(release))
        }
        .boxed()
    }
}
