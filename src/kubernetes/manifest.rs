// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Raw manifest application against a cluster's API

use crate::constants::FIELD_MANAGER;
use crate::error::{AddOnError, Result};
use futures::future::{BoxFuture, FutureExt};
use kube::{
    api::{Api, DynamicObject, Patch, PatchParams, PostParams},
    core::GroupVersionKind,
    discovery::ApiResource,
    Client,
};
use serde_json::Value;
use tracing::{info, instrument};

/// An ordered set of documents to apply to one cluster
#[derive(Debug, Clone, PartialEq)]
pub struct KubernetesManifest {
    /// Identifier of the manifest within the provisioning run
    pub id: String,
    /// Name of the target cluster
    pub cluster: String,
    pub manifest: Vec<Value>,
    /// Replace existing resources instead of failing on conflict
    pub overwrite: bool,
}

/// Applies manifests to a cluster
pub trait ManifestApplier: Send + Sync {
    fn apply<'a>(&'a self, manifest: KubernetesManifest) -> BoxFuture<'a, Result<()>>;
}

/// Applier talking to the API server directly.
///
/// With `overwrite` every document is server-side applied with forced field
/// ownership; without it documents are created and conflicts surface as errors.
#[derive(Clone)]
pub struct KubeManifestApplier {
    client: Client,
    dry_run: bool,
}

impl KubeManifestApplier {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[instrument(skip(self, manifest), fields(id = %manifest.id, cluster = %manifest.cluster, documents = manifest.manifest.len()))]
    async fn apply_all(&self, manifest: KubernetesManifest) -> Result<()> {
        for document in manifest.manifest {
            self.apply_document(document, manifest.overwrite).await?;
        }
        Ok(())
    }

    async fn apply_document(&self, document: Value, overwrite: bool) -> Result<()> {
        let obj: DynamicObject = serde_json::from_value(document)
            .map_err(|e| AddOnError::InvalidManifest(format!("Failed to decode document: {}", e)))?;
        let gvk = gvk_of(&obj)?;
        let name = obj
            .metadata
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                AddOnError::InvalidManifest(format!("{} is missing metadata.name", gvk.kind))
            })?;

        let ar = ApiResource::from_gvk(&gvk);
        let api: Api<DynamicObject> = match obj.metadata.namespace.as_deref() {
            Some(ns) => Api::namespaced_with(self.client.clone(), ns, &ar),
            None => Api::all_with(self.client.clone(), &ar),
        };

        if overwrite {
            let mut pp = PatchParams::apply(FIELD_MANAGER).force();
            pp.dry_run = self.dry_run;
            api.patch(&name, &pp, &Patch::Apply(&obj)).await?;
        } else {
            let pp = PostParams {
                dry_run: self.dry_run,
                field_manager: Some(FIELD_MANAGER.to_string()),
            };
            api.create(&pp, &obj).await?;
        }

        info!("Applied {} {}", gvk.kind, name);
        Ok(())
    }
}

impl ManifestApplier for KubeManifestApplier {
    fn apply<'a>(&'a self, manifest: KubernetesManifest) -> BoxFuture<'a, Result<()>> {
        self.apply_all(manifest).boxed()
    }
}

/// Derive the group/version/kind from a document's `apiVersion` and `kind`.
///
/// `apps/v1` has group `apps`; a bare `v1` is the core group.
fn gvk_of(obj: &DynamicObject) -> Result<GroupVersionKind> {
    let types = obj
        .types
        .as_ref()
        .ok_or_else(|| AddOnError::InvalidManifest("Document has no apiVersion/kind".to_string()))?;
    let (group, version) = types
        .api_version
        .rsplit_once('/')
        .unwrap_or(("", types.api_version.as_str()));
    Ok(GroupVersionKind::gvk(group, version, &types.kind))
}
