// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace management for chart installs

use crate::error::{AddOnError, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client,
};
use tracing::{debug, info, instrument};

/// Make sure the namespace a chart is released into exists, creating it if needed.
///
/// With `dry_run` the create is only validated by the API server.
#[instrument(skip(client))]
pub async fn ensure_namespace_exists(client: &Client, namespace: &str, dry_run: bool) -> Result<()> {
    let namespaces: Api<Namespace> = Api::all(client.clone());

    let existing = namespaces.get_opt(namespace).await.map_err(|e| {
        AddOnError::NamespaceError(format!("Failed to look up namespace {}: {}", namespace, e))
    })?;
    if existing.is_some() {
        debug!("Namespace {} already exists", namespace);
        return Ok(());
    }

    info!("Creating namespace {}", namespace);
    let ns = Namespace {
        metadata: ObjectMeta {
            name: Some(namespace.to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    let pp = PostParams {
        dry_run,
        ..Default::default()
    };
    namespaces
        .create(&pp, &ns)
        .await
        .map_err(|e| {
            AddOnError::NamespaceError(format!("Failed to create namespace {}: {}", namespace, e))
        })?;

    Ok(())
}
