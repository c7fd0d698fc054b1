// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! IngressClass add-on: creates a single IngressClass resource

use crate::addons::{ClusterAddOn, Deployment};
use crate::cluster::ClusterInfo;
use crate::constants::{annotations, ingress_class as defaults};
use crate::error::Result;
use crate::kubernetes::KubernetesManifest;
use crate::options::resolve;
use futures::future::{BoxFuture, FutureExt};
use k8s_openapi::api::networking::v1::{IngressClass, IngressClassSpec};
use kube::api::ObjectMeta;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// User provided overrides for the IngressClass manifest
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IngressClassAddOnProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,
    /// Mark this class as the cluster's default IngressClass
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_controller: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IngressClassOptions {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    pub controller: String,
    pub default_controller: bool,
}

impl Default for IngressClassOptions {
    fn default() -> Self {
        Self {
            name: defaults::NAME.to_string(),
            labels: None,
            annotations: None,
            controller: defaults::CONTROLLER.to_string(),
            default_controller: false,
        }
    }
}

pub struct IngressClassAddOn {
    options: IngressClassOptions,
}

impl IngressClassAddOn {
    pub fn new(props: IngressClassAddOnProps) -> Result<Self> {
        let options = resolve(&IngressClassOptions::default(), &props)?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &IngressClassOptions {
        &self.options
    }

    /// The IngressClass document this add-on applies
    pub fn render(&self) -> IngressClass {
        let mut manifest = ingress_class_template();
        update_manifest(&mut manifest, &self.options);
        manifest
    }

    #[instrument(skip(self, cluster), fields(name = %self.options.name, cluster = %cluster.name()))]
    async fn apply(&self, cluster: &ClusterInfo) -> Result<Deployment> {
        let manifest = KubernetesManifest {
            id: defaults::MANIFEST_ID.to_string(),
            cluster: cluster.name().to_string(),
            manifest: vec![serde_json::to_value(self.render())?],
            overwrite: true,
        };
        let documents = manifest.manifest.len();

        cluster.manifest_applier().apply(manifest).await?;

        info!(
            "IngressClass {} submitted with controller {}",
            self.options.name, self.options.controller
        );
        Ok(Deployment::Manifest {
            id: defaults::MANIFEST_ID.to_string(),
            documents,
        })
    }
}

impl ClusterAddOn for IngressClassAddOn {
    fn name(&self) -> &str {
        defaults::MANIFEST_ID
    }

    fn deploy<'a>(&'a self, cluster: &'a ClusterInfo) -> BoxFuture<'a, Result<Deployment>> {
        self.apply(cluster).boxed()
    }
}

/// Empty `networking.k8s.io/v1` IngressClass with unset name and controller
pub fn ingress_class_template() -> IngressClass {
    IngressClass {
        metadata: ObjectMeta::default(),
        spec: Some(IngressClassSpec::default()),
    }
}

/// Write name, controller, labels and annotations from `options` into `manifest`.
///
/// Labels stay unset when none are configured; annotations are always set. The
/// default-class marker is written last and wins over a caller annotation of the same key.
pub fn update_manifest(manifest: &mut IngressClass, options: &IngressClassOptions) {
    manifest.metadata.name = Some(options.name.clone());
    manifest
        .spec
        .get_or_insert_with(IngressClassSpec::default)
        .controller = Some(options.controller.clone());
    manifest.metadata.labels = options.labels.clone();

    let mut merged = options.annotations.clone().unwrap_or_default();
    if options.default_controller {
        merged.insert(annotations::IS_DEFAULT_CLASS.to_string(), "true".to_string());
    }
    manifest.metadata.annotations = Some(merged);
}
