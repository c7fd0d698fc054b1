// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blueprint_addons::addons::{IngressClassAddOn, KubeviousAddOn};
use blueprint_addons::blueprint::Blueprint;
use blueprint_addons::cluster::ClusterInfo;
use blueprint_addons::config::Config;
use blueprint_addons::kubernetes::{HelmCliInstaller, KubeManifestApplier};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: blueprint={}, dry_run={}",
        config.blueprint_name, config.dry_run
    );
    let addons = config.load_addons()?;

    let client = config.kube_client().await?;
    info!("Connected to Kubernetes cluster");

    let installer = HelmCliInstaller::new(config.helm_binary.clone())
        .with_kube_context(config.kube_context.clone())
        .with_dry_run(config.dry_run);
    let applier = KubeManifestApplier::new(client.clone()).with_dry_run(config.dry_run);
    let cluster = ClusterInfo::new(
        config.kube_context.clone().unwrap_or_else(|| "default".to_string()),
        client,
    )
    .with_chart_installer(Arc::new(installer))
    .with_manifest_applier(Arc::new(applier))
    .with_dry_run(config.dry_run);

    let blueprint = Blueprint::builder()
        .name(config.blueprint_name.clone())
        .add_on(KubeviousAddOn::new(addons.kubevious)?)
        .add_on(IngressClassAddOn::new(addons.ingress_class)?)
        .build();

    let deployments = blueprint.deploy(&cluster).await?;
    for deployment in &deployments {
        info!("{:?}", deployment);
    }

    Ok(())
}
